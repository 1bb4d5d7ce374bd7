//! Secret-code dialogs for the locker, the safe, and the breaker panel
//!
//! A critical `use` opens one dialog by setting the input mode. The next
//! submitted line is consumed by `answer` as the code, whatever it says,
//! and the mode is cleared afterwards.

use crate::core::types::{Fact, InputMode, Item, Location};
use crate::world::WorldState;

pub const LOCKER_CODE: &str = "8675309";
pub const SAFE_CODE: &str = "4711";
pub const BREAKER_WORD: &str = "overstock";
/// OVERSTOCK typed on a phone keypad
pub const BREAKER_DIGITS: &str = "683778625";

const CONFRONTATION: &str = "CLUNK! A heavy sound echoes - the main magnetic door locks release.\nSuddenly, Gary lunges! 'You meddling kids!' From the shadows, Brenda appears, holding a wrench. 'Dale knew you were skimming, Gary!' she shouts.\nAfter a brief struggle, Gary is subdued near the loading dock door's manual release lever.\nYou can now 'escape' through the loading dock door.";

/// Handle a puzzle-critical `use`, opening the dialog for this location.
///
/// `full_input` is the whole command line so embedded codes are seen even
/// when they are not the object.
pub fn trigger(state: &mut WorldState, object: &str, full_input: &str) {
    let input = full_input.to_lowercase();

    match state.location {
        Location::LockerArea => {
            if input.contains(LOCKER_CODE) {
                open_dialog(state, InputMode::LockerCode, "Enter the code for the locker:");
            } else {
                state.say(format!("To use the code on the locker, try 'use {}'.", LOCKER_CODE));
            }
        }
        Location::ManagersOffice => {
            if input.contains(SAFE_CODE) {
                open_dialog(state, InputMode::SafeCode, "Enter the code for the safe:");
            } else {
                state.say(format!("To use the code on the safe, try 'use {}'.", SAFE_CODE));
            }
        }
        Location::LoadingDock => {
            let mentions_panel = mentions_breaker(&input);
            let has_key = state.has_item(Item::OverrideKey);

            if mentions_panel && has_key {
                open_dialog(
                    state,
                    InputMode::BreakerCode,
                    "You insert the Manual Override Key into the panel slot. Now, enter the activation code (OVERSTOCK or keypad numbers):",
                );
            } else if mentions_panel {
                state.say("You need the Manual Override Key first. Find it in the manager's safe and 'take' it.");
            } else {
                state.say("To use the breaker panel, try 'use key' or 'use overstock' once you have the key.");
            }
        }
        _ => {
            state.say(format!("You can't use '{}' in that specific way here.", object));
        }
    }
}

/// True when the text names the override key or either form of the
/// breaker code
pub fn mentions_breaker(input: &str) -> bool {
    input.contains("key") || input.contains(BREAKER_WORD) || input.contains(BREAKER_DIGITS)
}

fn open_dialog(state: &mut WorldState, mode: InputMode, prompt: &str) {
    tracing::debug!("Awaiting {}", mode.key());
    state.input_mode = Some(mode);
    state.input_buffer.clear();
    state.say(prompt);
}

/// Consume one line as the answer to the active dialog. Always clears the
/// input mode, right or wrong.
pub fn answer(state: &mut WorldState, mode: InputMode, code: &str) {
    let code = code.trim().to_lowercase();

    match mode {
        InputMode::LockerCode => {
            if code == LOCKER_CODE {
                state.record(Fact::LockerOpened);
                let mut message = String::from("Click! The locker swings open.");
                message.push_str(&grant_from_container(state, Item::Notebook));
                state.say(message);
            } else {
                state.say("Incorrect code. The lock doesn't budge.");
            }
        }
        InputMode::SafeCode => {
            if code == SAFE_CODE {
                state.record(Fact::SafeOpened);
                let mut message = String::from("Click! The safe door opens.");
                message.push_str(&grant_from_container(state, Item::OverrideKey));
                state.say(message);
            } else {
                state.say("Incorrect code. The safe remains locked.");
            }
        }
        InputMode::BreakerCode => {
            let correct = code == BREAKER_WORD || code == BREAKER_DIGITS;
            let has_key = state.has_item(Item::OverrideKey);

            if !has_key {
                state.say("You need the Manual Override Key inserted to activate the panel.");
            } else if correct {
                state.record(Fact::DoorUnlocked);
                tracing::info!("Breaker panel accepted code; loading dock door unlocked");
                state.say(CONFRONTATION);
            } else {
                state.say("Incorrect code entered on the keypad. Nothing happens.");
            }
        }
    }

    state.input_mode = None;
}

fn grant_from_container(state: &mut WorldState, item: Item) -> String {
    if state.grant(item) {
        let article = if item == Item::OverrideKey { "the" } else { "a" };
        format!("\nYou find {} {} inside and take it.", article, item)
    } else {
        "\nIt's empty now.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad(word: &str) -> String {
        word.chars()
            .map(|c| match c.to_ascii_lowercase() {
                'a'..='c' => '2',
                'd'..='f' => '3',
                'g'..='i' => '4',
                'j'..='l' => '5',
                'm'..='o' => '6',
                'p'..='s' => '7',
                't'..='v' => '8',
                _ => '9',
            })
            .collect()
    }

    fn holding_key(location: Location) -> WorldState {
        let mut state = WorldState::at(location);
        state.record(Fact::SafeOpened);
        state.grant(Item::OverrideKey);
        state
    }

    #[test]
    fn test_breaker_digits_spell_overstock() {
        assert_eq!(keypad(BREAKER_WORD), BREAKER_DIGITS);
    }

    #[test]
    fn test_locker_trigger_opens_dialog() {
        let mut state = WorldState::at(Location::LockerArea);
        state.input_buffer.push_str("stale");
        trigger(&mut state, "8675309", "use 8675309");
        assert_eq!(state.input_mode, Some(InputMode::LockerCode));
        assert_eq!(state.message, "Enter the code for the locker:");
        assert!(state.input_buffer.is_empty());
    }

    #[test]
    fn test_locker_trigger_without_code() {
        let mut state = WorldState::at(Location::LockerArea);
        trigger(&mut state, "scanner", "use scanner");
        assert!(state.input_mode.is_none());
        assert_eq!(state.message, "To use the code on the locker, try 'use 8675309'.");
    }

    #[test]
    fn test_breaker_trigger_needs_key() {
        let mut state = WorldState::at(Location::LoadingDock);
        trigger(&mut state, "overstock", "use overstock");
        assert!(state.input_mode.is_none());
        assert!(state.message.starts_with("You need the Manual Override Key first."));

        let mut state = holding_key(Location::LoadingDock);
        trigger(&mut state, "key", "use key");
        assert_eq!(state.input_mode, Some(InputMode::BreakerCode));
    }

    #[test]
    fn test_trigger_elsewhere() {
        let mut state = WorldState::at(Location::Register);
        trigger(&mut state, "4711", "use 4711");
        assert!(state.input_mode.is_none());
        assert_eq!(state.message, "You can't use '4711' in that specific way here.");
    }

    #[test]
    fn test_correct_locker_code() {
        let mut state = WorldState::at(Location::LockerArea);
        state.input_mode = Some(InputMode::LockerCode);
        answer(&mut state, InputMode::LockerCode, "8675309");
        assert!(state.knows(Fact::LockerOpened));
        assert!(state.has_item(Item::Notebook));
        assert!(state.input_mode.is_none());
        assert_eq!(
            state.message,
            "Click! The locker swings open.\nYou find a small notebook inside and take it."
        );
    }

    #[test]
    fn test_locker_code_no_prefix_match() {
        let mut state = WorldState::at(Location::LockerArea);
        state.input_mode = Some(InputMode::LockerCode);
        answer(&mut state, InputMode::LockerCode, "867530");
        assert!(!state.knows(Fact::LockerOpened));
        assert!(state.input_mode.is_none());
        assert_eq!(state.message, "Incorrect code. The lock doesn't budge.");

        answer(&mut state, InputMode::LockerCode, "86753091");
        assert!(!state.knows(Fact::LockerOpened));
    }

    #[test]
    fn test_safe_code_grants_key() {
        let mut state = WorldState::at(Location::ManagersOffice);
        answer(&mut state, InputMode::SafeCode, "4711");
        assert!(state.knows(Fact::SafeOpened));
        assert!(state.has_item(Item::OverrideKey));
        assert!(state.message.ends_with("You find the Manual Override Key inside and take it."));
    }

    #[test]
    fn test_reopening_safe_is_empty() {
        let mut state = holding_key(Location::ManagersOffice);
        answer(&mut state, InputMode::SafeCode, "4711");
        assert_eq!(state.message, "Click! The safe door opens.\nIt's empty now.");
        assert_eq!(state.inventory_len(), 1);
    }

    #[test]
    fn test_breaker_word_case_insensitive() {
        let mut state = holding_key(Location::LoadingDock);
        answer(&mut state, InputMode::BreakerCode, "OVERSTOCK");
        assert!(state.knows(Fact::DoorUnlocked));
        assert!(state.message.contains("Gary lunges"));
    }

    #[test]
    fn test_breaker_without_key() {
        let mut state = WorldState::at(Location::LoadingDock);
        answer(&mut state, InputMode::BreakerCode, BREAKER_DIGITS);
        assert!(!state.knows(Fact::DoorUnlocked));
        assert_eq!(
            state.message,
            "You need the Manual Override Key inserted to activate the panel."
        );
    }

    #[test]
    fn test_breaker_wrong_code() {
        let mut state = holding_key(Location::LoadingDock);
        answer(&mut state, InputMode::BreakerCode, "understock");
        assert!(!state.knows(Fact::DoorUnlocked));
        assert_eq!(
            state.message,
            "Incorrect code entered on the keypad. Nothing happens."
        );
    }
}

//! Top-level command interpretation
//!
//! raw text -> (code dialog | verb switch) -> engine -> Outcome

use crate::command::parser::{parse, Verb};
use crate::command::{inventory, movement, puzzle, Outcome};
use crate::core::types::{Fact, Item, Location};
use crate::describe;
use crate::world::WorldState;

pub const USAGE_HINT: &str = "Please enter a command like 'look', 'go security', 'take voucher', 'use 8675309', 'inventory', or 'help'.";

pub const HELP_TEXT: &str = "Commands: look (l), go [place] (g), examine [item/area] (x), take [item] (t), use [item/code] (u), inventory (i), help (h), escape. \nUse 'examine' or 'look' for more details (handled by AI if available).";

pub const ESCAPE_TEXT: &str = "You shove the heavy door open and slip out into the fierce storm. Sirens approach...\n\nYou escaped the Blackout Nightmare!";

/// Interpret one line of input against the world.
///
/// `use` lines must already have passed `is_critical_use`; this function
/// does not re-check. The turn message is always written to
/// `state.message` and mirrored in the returned outcome.
pub fn interpret(state: &mut WorldState, raw_input: &str) -> Outcome {
    let input = raw_input.trim().to_lowercase();

    if let Some(mode) = state.input_mode {
        puzzle::answer(state, mode, &input);
        return resolved(state);
    }

    let Some(command) = parse(&input) else {
        state.say(USAGE_HINT);
        return resolved(state);
    };

    match command.verb {
        Verb::Go => movement::go(state, &command.object),
        Verb::Take => inventory::take(state, &command.object),
        Verb::Use => puzzle::trigger(state, &command.object, &input),
        Verb::Inventory => {
            let listing = describe::inventory_description(state);
            state.say(listing);
        }
        Verb::Help => state.say(HELP_TEXT),
        Verb::Escape => escape(state),
        Verb::Look => {
            // Learning the map changes routing, so that turn stays local
            if !examine(state, &command.object) {
                return unresolved(state);
            }
        }
        Verb::Unknown(word) => {
            state.say(format!("I don't understand '{}'. Try 'help'.", word));
            return unresolved(state);
        }
    }

    resolved(state)
}

fn escape(state: &mut WorldState) {
    if state.location != Location::LoadingDock {
        state.say("You can't escape from here. You need to reach the unlocked loading dock door.");
    } else if state.knows(Fact::DoorUnlocked) {
        tracing::info!("Player escaped");
        state.mark_escaped();
        state.say(ESCAPE_TEXT);
    } else {
        state.say("You try the heavy loading dock door, but it's still magnetically locked.");
    }
}

/// Fallback examine. Reading the notebook is also how the player learns
/// the route to the loading dock; returns true on that first reading.
fn examine(state: &mut WorldState, object: &str) -> bool {
    let mut message = describe::examine_fallback(state, object);

    let reads_notebook = Item::from_name(object) == Some(Item::Notebook)
        && state.has_item(Item::Notebook);
    let discovered = reads_notebook && state.record(Fact::MapDiscovered);
    if discovered {
        message.push_str(" You study Dale's crude map: the breaker panel is out by the loading dock.");
    }

    state.say(message);
    discovered
}

fn resolved(state: &WorldState) -> Outcome {
    Outcome::Resolved(state.message.clone())
}

fn unresolved(state: &WorldState) -> Outcome {
    Outcome::Unresolved {
        fallback: state.message.clone(),
    }
}

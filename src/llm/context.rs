//! Gather game context for narrator prompts
//!
//! A `NarrationRequest` is a detached snapshot of the world plus the
//! player's words. It owns all its data so the caller can carry it across
//! an async boundary while the world stays untouched.

use crate::describe;
use crate::world::WorldState;
use serde::{Deserialize, Serialize};

/// Everything the narrator is told about one turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationRequest {
    /// The player's raw input
    pub input: String,
    pub location_name: String,
    pub location_description: String,
    /// Held item names in canonical order
    pub inventory: Vec<String>,
    /// Known fact key/value pairs
    pub facts: Vec<(String, String)>,
}

impl NarrationRequest {
    /// Build a request from the current world state
    pub fn from_world(state: &WorldState, input: &str) -> Self {
        Self {
            input: input.to_string(),
            location_name: describe::location_name(state.location).to_string(),
            location_description: describe::location_description(state),
            inventory: state
                .inventory()
                .into_iter()
                .map(|item| item.name().to_string())
                .collect(),
            facts: state
                .facts()
                .into_iter()
                .map(|fact| (fact.key().to_string(), fact.value().to_string()))
                .collect(),
        }
    }

    /// Fixed framing: premise, puzzle path, and narration rules
    pub fn system_prompt(&self) -> &'static str {
        NARRATOR_SYSTEM_PROMPT
    }

    /// Serialized state, then the action, then the cue to respond
    pub fn user_prompt(&self) -> String {
        let mut s = String::new();

        s.push_str("--- Current State ---\n");
        s.push_str(&format!(
            "Location: {} ({})\n",
            self.location_name, self.location_description
        ));

        if self.inventory.is_empty() {
            s.push_str("Inventory: Empty\n");
        } else {
            s.push_str(&format!("Inventory: {}\n", self.inventory.join(", ")));
        }

        if !self.facts.is_empty() {
            let clues: Vec<String> = self
                .facts
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect();
            s.push_str(&format!("Known Clues: {}\n", clues.join("; ")));
        }

        s.push_str("\n--- Player Action ---\n");
        s.push_str(&self.input);
        s.push_str("\n\n--- Narrator Response ---\nDescribe the result: ");

        s
    }
}

/// System prompt for narration
const NARRATOR_SYSTEM_PROMPT: &str = r#"You are the narrator for 'Blackout Bargain', a text adventure game. The player is trapped in a dark Superstore after a power failure killed the lights and locked the doors. Dale, the security guard, was found dead (puncture wound, neck). The player is with Brenda (stocker) and Gary (manager). Goal: Escape.

CORE PUZZLE PATH:
Find Dale (security station) -> Get Voucher (from Dale) & Scanner -> Use scanner code (8675309) on Locker -> Get Notebook -> Read notebook (mentions Brenda/Gary, 'OVERSTOCK' silent alarm, map to breaker panel needing manager key) -> Go to Manager's Office -> Get Emergency Card (mentions key in safe, code is 'OVERSTOCK' from inventory sheet) -> Get Inventory Sheet -> Use sheet ('OVERSTOCK' -> code 4711) on Safe -> Get Override Key -> Go to Loading Dock Breaker Panel (from map) -> Use Key & 'OVERSTOCK' (or 683778625) on panel -> Unlock door -> Confrontation (Gary is killer) -> Escape.

RULES:
- Narrate atmospheric outcomes of player actions based on the current state.
- Stick to the established items, characters, and puzzle path.
- Do NOT invent new major items, characters, bypasses, or solutions.
- If the player tries something irrelevant or impossible, explain why it fails or gently guide them back to relevant actions based on their known clues and location.
- Be concise but descriptive. Keep the tone tense and mysterious."#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Fact, Item, Location};

    #[test]
    fn test_request_from_fresh_world() {
        let state = WorldState::new();
        let request = NarrationRequest::from_world(&state, "look around");
        assert_eq!(request.input, "look around");
        assert_eq!(request.location_name, "Near Register 4 (Front)");
        assert!(request.inventory.is_empty());
        assert!(request.facts.is_empty());

        let prompt = request.user_prompt();
        assert!(prompt.contains("Inventory: Empty"));
        assert!(!prompt.contains("Known Clues"));
        assert!(prompt.ends_with("Describe the result: "));
    }

    #[test]
    fn test_request_lists_inventory_and_clues() {
        let mut state = WorldState::at(Location::LockerArea);
        state.record(Fact::LockerOpened);
        state.grant(Item::Notebook);
        state.grant(Item::Scanner);

        let request = NarrationRequest::from_world(&state, "search the locker");
        assert_eq!(
            request.inventory,
            vec!["Dale's handheld scanner".to_string(), "small notebook".to_string()]
        );
        assert_eq!(
            request.facts,
            vec![("locker_opened".to_string(), "true".to_string())]
        );

        let prompt = request.user_prompt();
        assert!(prompt.contains("Location: Employee Locker Area (You are standing near the employee lockers."));
        assert!(prompt.contains("Known Clues: locker_opened: true"));
        let state_at = prompt.find("--- Current State ---").unwrap();
        let action_at = prompt.find("--- Player Action ---").unwrap();
        assert!(state_at < action_at);
    }

    #[test]
    fn test_system_prompt_forbids_inventions() {
        let request = NarrationRequest::from_world(&WorldState::new(), "x");
        assert!(request.system_prompt().contains("Do NOT invent"));
        assert!(request.system_prompt().contains("Blackout Bargain"));
    }

    #[test]
    fn test_request_serializes() {
        let request = NarrationRequest::from_world(&WorldState::new(), "talk to brenda");
        let json = serde_json::to_string(&request).unwrap();
        let back: NarrationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}

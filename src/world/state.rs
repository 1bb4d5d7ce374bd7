//! Session world state - the single container every engine reads and writes

use crate::core::types::{Fact, InputMode, Item, Location};
use ahash::AHashSet;

/// The complete state of one play session.
///
/// Inventory and facts are append-only: there is no way to remove an item
/// or retract a fact once recorded.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    /// Where the player currently is
    pub location: Location,
    inventory: AHashSet<Item>,
    facts: AHashSet<Fact>,
    /// Set while a code dialog waits for its single answer line
    pub input_mode: Option<InputMode>,
    /// Feedback for the current turn, overwritten every turn
    pub message: String,
    /// Raw text typed since the last submit
    pub input_buffer: String,
    escaped: bool,
}

impl WorldState {
    /// Start a fresh session at the registers with nothing known
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session at a given location (useful for scenario setup)
    pub fn at(location: Location) -> Self {
        Self {
            location,
            ..Self::default()
        }
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.inventory.contains(&item)
    }

    /// Add an item to the inventory. Returns false if it was already held.
    pub fn grant(&mut self, item: Item) -> bool {
        debug_assert!(
            item.prerequisite().map_or(true, |(fact, _)| self.knows(fact)),
            "{:?} granted before its prerequisite fact",
            item
        );
        self.inventory.insert(item)
    }

    /// Held items in canonical order
    pub fn inventory(&self) -> Vec<Item> {
        Item::ALL
            .into_iter()
            .filter(|item| self.inventory.contains(item))
            .collect()
    }

    pub fn inventory_len(&self) -> usize {
        self.inventory.len()
    }

    pub fn knows(&self, fact: Fact) -> bool {
        self.facts.contains(&fact)
    }

    /// Record a fact. Returns false if it was already known.
    pub fn record(&mut self, fact: Fact) -> bool {
        let added = self.facts.insert(fact);
        if added {
            tracing::debug!("Fact recorded: {}", fact.key());
        }
        added
    }

    /// Known facts in canonical order
    pub fn facts(&self) -> Vec<Fact> {
        Fact::ALL
            .into_iter()
            .filter(|fact| self.facts.contains(fact))
            .collect()
    }

    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Terminal transition: the player is out of the building
    pub(crate) fn mark_escaped(&mut self) {
        self.escaped = true;
        self.location = Location::Escaped;
    }

    /// Replace the turn message
    pub fn say(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

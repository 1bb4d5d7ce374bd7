//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Places the player can be in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Location {
    #[default]
    Register,
    SecurityStation,
    LockerArea,
    ManagersOffice,
    LoadingDock,
    Escaped,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Register,
        Location::SecurityStation,
        Location::LockerArea,
        Location::ManagersOffice,
        Location::LoadingDock,
        Location::Escaped,
    ];

    /// Items that can be picked up here, before prerequisite checks
    pub fn takeable_items(self) -> &'static [Item] {
        match self {
            Location::SecurityStation => &[Item::Voucher, Item::Scanner],
            Location::LockerArea => &[Item::Notebook],
            Location::ManagersOffice => &[Item::Card, Item::InventorySheet, Item::OverrideKey],
            Location::Register | Location::LoadingDock | Location::Escaped => &[],
        }
    }
}

/// Collectible items. Identity is the variant; `name()` is presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Item {
    Voucher,
    Scanner,
    Notebook,
    Card,
    InventorySheet,
    OverrideKey,
}

impl Item {
    pub const ALL: [Item; 6] = [
        Item::Voucher,
        Item::Scanner,
        Item::Notebook,
        Item::Card,
        Item::InventorySheet,
        Item::OverrideKey,
    ];

    /// Canonical display string
    pub fn name(self) -> &'static str {
        match self {
            Item::Voucher => "crumpled employee discount voucher",
            Item::Scanner => "Dale's handheld scanner",
            Item::Notebook => "small notebook",
            Item::Card => "laminated emergency procedure card",
            Item::InventorySheet => "daily inventory printout",
            Item::OverrideKey => "Manual Override Key",
        }
    }

    /// Look up an item by its full canonical name, ignoring case and
    /// surrounding whitespace. Partial names never match.
    pub fn from_name(text: &str) -> Option<Item> {
        let wanted = text.trim();
        Item::ALL
            .into_iter()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
    }

    /// Fact that must be known before the item can be taken, with the
    /// message shown when it is missing
    pub fn prerequisite(self) -> Option<(Fact, &'static str)> {
        match self {
            Item::Notebook => Some((Fact::LockerOpened, "The locker needs to be open first.")),
            Item::OverrideKey => Some((Fact::SafeOpened, "The safe needs to be open first.")),
            _ => None,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// World events and knowledge. Presence means true; facts are never retracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fact {
    LockerOpened,
    SafeOpened,
    DoorUnlocked,
    MapDiscovered,
}

impl Fact {
    pub const ALL: [Fact; 4] = [
        Fact::LockerOpened,
        Fact::SafeOpened,
        Fact::DoorUnlocked,
        Fact::MapDiscovered,
    ];

    /// Ledger key, as shown to the narrator
    pub fn key(self) -> &'static str {
        match self {
            Fact::LockerOpened => "locker_opened",
            Fact::SafeOpened => "safe_opened",
            Fact::DoorUnlocked => "door_unlocked",
            Fact::MapDiscovered => "map_details",
        }
    }

    /// Ledger value, as shown to the narrator
    pub fn value(self) -> &'static str {
        match self {
            Fact::MapDiscovered => "route from the office corridor to the loading dock breaker panel",
            _ => "true",
        }
    }
}

/// Pending single-line code dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    LockerCode,
    SafeCode,
    BreakerCode,
}

impl InputMode {
    pub fn key(self) -> &'static str {
        match self {
            InputMode::LockerCode => "locker_code",
            InputMode::SafeCode => "safe_code",
            InputMode::BreakerCode => "breaker_code",
        }
    }

    /// Human-readable label used in the input prompt
    pub fn label(self) -> &'static str {
        match self {
            InputMode::LockerCode => "locker code",
            InputMode::SafeCode => "safe code",
            InputMode::BreakerCode => "breaker code",
        }
    }
}

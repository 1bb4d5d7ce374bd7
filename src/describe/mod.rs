//! Read-only narrative derived from the world state
//!
//! These texts are the default screen content and the fallback whenever the
//! external narrator is unavailable. Nothing here mutates the world.

use crate::core::types::{Fact, Item, Location};
use crate::world::WorldState;

/// Short display name for a location
pub fn location_name(location: Location) -> &'static str {
    match location {
        Location::Register => "Near Register 4 (Front)",
        Location::SecurityStation => "Security Station (Electronics)",
        Location::LockerArea => "Employee Locker Area",
        Location::ManagersOffice => "Manager's Office",
        Location::LoadingDock => "Loading Dock (Back)",
        Location::Escaped => "Outside (Escaped)",
    }
}

/// Base description of the current location, with fact-dependent details
pub fn location_description(state: &WorldState) -> String {
    match state.location {
        Location::Register => "The Superstore is eerily dark, lit only by emergency signs. Thunder rattles the windows. You're near Register 4 with Brenda and Gary. The main doors are dead silent and locked.".to_string(),
        Location::SecurityStation => "You're at the security station in the dimly lit electronics section. Dale's body is slumped against the dark monitors.".to_string(),
        Location::LockerArea => {
            let mut desc = String::from("You are standing near the employee lockers. Dale's locker is here.");
            if state.knows(Fact::LockerOpened) {
                desc.push_str(" It's open.");
            } else {
                desc.push_str(" It looks locked.");
            }
            desc
        }
        Location::ManagersOffice => "You are inside the cramped manager's office. There's a desk, a corkboard, and a small safe embedded in the wall.".to_string(),
        Location::LoadingDock => {
            let mut desc = String::from(
                "You've reached the loading dock area at the back of the store. The storm howls louder here.",
            );
            if state.knows(Fact::DoorUnlocked) {
                desc.push_str("\nThe heavy loading door stands slightly ajar, unlocked!");
            } else {
                desc.push_str("\nA large breaker panel is on the wall next to the sealed loading door.");
            }
            desc
        }
        Location::Escaped => "You are outside in the raging storm.".to_string(),
    }
}

/// Items the player could take right now: present here, not yet held, and
/// not locked away behind a missing fact
pub fn visible_items(state: &WorldState) -> Vec<Item> {
    state
        .location
        .takeable_items()
        .iter()
        .copied()
        .filter(|item| !state.has_item(*item))
        .filter(|item| item.prerequisite().map_or(true, |(fact, _)| state.knows(fact)))
        .collect()
}

/// "You see: ..." line, or an empty string when nothing is visible
pub fn visible_items_text(state: &WorldState) -> String {
    let items = visible_items(state);
    if items.is_empty() {
        return String::new();
    }
    format!("You see: {}.", join_names(&items))
}

/// Inventory listing with an explicit empty sentinel
pub fn inventory_description(state: &WorldState) -> String {
    let items = state.inventory();
    if items.is_empty() {
        return "Inventory: Empty.".to_string();
    }
    format!("Inventory: {}.", join_names(&items))
}

/// Prompt shown before the input buffer
pub fn input_prompt(state: &WorldState) -> String {
    match state.input_mode {
        Some(mode) => format!("Enter {}: ", mode.label()),
        None => "> ".to_string(),
    }
}

/// Close-up text for a held item
pub fn item_detail(item: Item) -> &'static str {
    match item {
        Item::Voucher => "Voucher: Back says AISLE 13 // LAST SCAN.",
        Item::Scanner => "Scanner: Frozen on Product ID: 8675309.",
        Item::Notebook => "Notebook: Mentions Brenda/Gary, OVERSTOCK alarm, Map.",
        Item::Card => "Card: Needs Key (safe) & Code ('OVERSTOCK' from Inventory).",
        Item::InventorySheet => "Inventory Sheet: OVERSTOCK -> Code: 4711.",
        Item::OverrideKey => "Key: Labeled 'Manual Override'.",
    }
}

/// Basic examine text used when no narrator is available.
///
/// A held item named exactly gets its detail line; anything else describes
/// the surroundings plus hints about items still lying around.
pub fn examine_fallback(state: &WorldState, object: &str) -> String {
    if let Some(item) = Item::from_name(object) {
        if state.has_item(item) {
            return item_detail(item).to_string();
        }
    }

    let mut message = match state.location {
        Location::Register => "It's dark. Emergency lights glow. Main doors locked.",
        Location::SecurityStation => {
            "Dale's body is here. Monitors dark. Scanner nearby? Voucher clutched?"
        }
        Location::LockerArea => "Dale's locker. Is it locked or open?",
        Location::ManagersOffice => "Office: Desk, Corkboard (Card?), Safe.",
        Location::LoadingDock => "Loading Dock: Breaker Panel, heavy door.",
        Location::Escaped => "You look around.",
    }
    .to_string();

    for item in visible_items(state) {
        message.push(' ');
        message.push_str(item_hint(item));
    }
    message
}

fn item_hint(item: Item) -> &'static str {
    match item {
        Item::Voucher => "Dale clutches a voucher.",
        Item::Scanner => "A scanner lies nearby.",
        Item::Notebook => "A notebook is inside the open locker.",
        Item::Card => "A card is pinned to the board.",
        Item::InventorySheet => "An inventory sheet is on the desk.",
        Item::OverrideKey => "A key sits inside the open safe.",
    }
}

fn join_names(items: &[Item]) -> String {
    items
        .iter()
        .map(|item| item.name())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Picking items up

use crate::core::types::Item;
use crate::world::WorldState;

/// Try to take an item named exactly by `object`.
///
/// Checks run in order: already held, not here, prerequisite missing.
/// Only when all pass does the inventory change.
pub fn take(state: &mut WorldState, object: &str) {
    let object = object.trim();
    let item = Item::from_name(object);

    if let Some(item) = item.filter(|item| state.has_item(*item)) {
        state.say(format!("You already have the {}.", item));
        return;
    }

    let Some(item) = item.filter(|item| state.location.takeable_items().contains(item)) else {
        state.say(format!("You don't see a '{}' you can take here.", object));
        return;
    };

    if let Some((fact, blocked)) = item.prerequisite() {
        if !state.knows(fact) {
            state.say(blocked);
            return;
        }
    }

    state.grant(item);
    tracing::debug!("Took {:?}", item);
    state.say(format!("You take the {}.", item));
}

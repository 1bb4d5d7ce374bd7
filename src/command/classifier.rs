//! Decides which `use` commands must be resolved by the puzzle engine

use crate::command::puzzle::{mentions_breaker, LOCKER_CODE, SAFE_CODE};
use crate::core::types::{Item, Location};
use crate::world::WorldState;

/// True when a `use` line touches puzzle-gating state and so must not be
/// handed to the narrator. Pure: reads the state, never changes it.
pub fn is_critical_use(state: &WorldState, raw_input: &str) -> bool {
    let input = raw_input.to_lowercase();
    match state.location {
        Location::LockerArea => input.contains(LOCKER_CODE),
        Location::ManagersOffice => input.contains(SAFE_CODE),
        Location::LoadingDock => state.has_item(Item::OverrideKey) && mentions_breaker(&input),
        _ => false,
    }
}

//! Movement between store locations
//!
//! Routes are matched by keyword containment: any keyword appearing
//! anywhere in the destination text selects the route. When several routes
//! from the same location match, the one declared first in `ROUTES` wins.

use crate::core::types::{Fact, Location};
use crate::world::WorldState;

/// A directed edge in the store graph
#[derive(Debug)]
pub struct Route {
    pub from: Location,
    pub to: Location,
    pub keywords: &'static [&'static str],
    /// Fact needed to take this route, with the message shown without it
    pub requires: Option<(Fact, &'static str)>,
    /// Flavor text on arrival
    pub arrival: &'static str,
}

impl Route {
    fn matches(&self, destination: &str) -> bool {
        self.keywords.iter().any(|kw| destination.contains(kw))
    }
}

const DOCK_KEYWORDS: &[&str] = &["loading", "dock", "breaker"];

pub const ROUTES: &[Route] = &[
    Route {
        from: Location::Register,
        to: Location::SecurityStation,
        keywords: &["security", "electronics", "back", "scream"],
        requires: None,
        arrival: "You hurry towards the back of the store, near the electronics section where the scream came from.",
    },
    Route {
        from: Location::SecurityStation,
        to: Location::LockerArea,
        keywords: &["locker"],
        requires: None,
        arrival: "You move towards the nearby employee lockers, focusing on Dale's.",
    },
    Route {
        from: Location::SecurityStation,
        to: Location::ManagersOffice,
        keywords: &["office", "manager"],
        requires: None,
        arrival: "You head towards the small manager's office behind the customer service area.",
    },
    Route {
        from: Location::SecurityStation,
        to: Location::LoadingDock,
        keywords: DOCK_KEYWORDS,
        requires: Some((
            Fact::MapDiscovered,
            "You aren't sure exactly where the loading dock or the specific breaker panel is.",
        )),
        arrival: "Following the crude map from Dale's notebook, you find the loading dock area.",
    },
    Route {
        from: Location::SecurityStation,
        to: Location::Register,
        keywords: &["register", "front"],
        requires: None,
        arrival: "You head back towards the front registers.",
    },
    Route {
        from: Location::LockerArea,
        to: Location::SecurityStation,
        keywords: &["security"],
        requires: None,
        arrival: "You step away from the lockers and back to the main security station area.",
    },
    Route {
        from: Location::ManagersOffice,
        to: Location::SecurityStation,
        keywords: &["security", "customer service"],
        requires: None,
        arrival: "You leave the manager's office, heading back towards the security station.",
    },
    Route {
        from: Location::ManagersOffice,
        to: Location::LoadingDock,
        keywords: DOCK_KEYWORDS,
        requires: Some((
            Fact::MapDiscovered,
            "You don't know the specific route to the loading dock from here without the map details.",
        )),
        arrival: "You head from the office towards the loading dock, following the map's directions.",
    },
    Route {
        from: Location::LoadingDock,
        to: Location::ManagersOffice,
        keywords: &["office"],
        requires: None,
        arrival: "You head back towards the manager's office area.",
    },
    Route {
        from: Location::LoadingDock,
        to: Location::SecurityStation,
        keywords: &["security"],
        requires: None,
        arrival: "You move back towards the main security station area.",
    },
];

/// Routes leaving a location, in priority order
pub fn routes_from(location: Location) -> impl Iterator<Item = &'static Route> {
    ROUTES.iter().filter(move |route| route.from == location)
}

/// Find the route a destination text selects from a location
pub fn find_route(location: Location, destination: &str) -> Option<&'static Route> {
    routes_from(location).find(|route| route.matches(destination))
}

/// Try to move the player. Location only changes on success; the turn
/// message is always set.
pub fn go(state: &mut WorldState, destination: &str) {
    let destination = destination.trim();
    if destination.is_empty() {
        state.say("Where do you want to go? (e.g., 'go security', 'go office')");
        return;
    }

    let Some(route) = find_route(state.location, destination) else {
        state.say(format!(
            "You can't find a way to '{}' from here, or you don't know where that is.",
            destination
        ));
        return;
    };

    if let Some((fact, blocked)) = route.requires {
        if !state.knows(fact) {
            tracing::debug!("Route {:?} -> {:?} blocked on {}", route.from, route.to, fact.key());
            state.say(blocked);
            return;
        }
    }

    tracing::debug!("Moved {:?} -> {:?}", route.from, route.to);
    state.location = route.to;
    state.say(route.arrival);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_to_security_by_any_keyword() {
        for dest in ["security", "electronics", "the back", "towards the scream"] {
            let mut state = WorldState::new();
            go(&mut state, dest);
            assert_eq!(state.location, Location::SecurityStation, "dest: {}", dest);
            assert!(state.message.contains("electronics section"));
        }
    }

    #[test]
    fn test_empty_destination() {
        let mut state = WorldState::new();
        go(&mut state, "");
        assert_eq!(state.location, Location::Register);
        assert_eq!(
            state.message,
            "Where do you want to go? (e.g., 'go security', 'go office')"
        );
    }

    #[test]
    fn test_unknown_destination() {
        let mut state = WorldState::at(Location::LockerArea);
        go(&mut state, "roof");
        assert_eq!(state.location, Location::LockerArea);
        assert_eq!(
            state.message,
            "You can't find a way to 'roof' from here, or you don't know where that is."
        );
    }

    #[test]
    fn test_dock_needs_map() {
        let mut state = WorldState::at(Location::SecurityStation);
        go(&mut state, "loading dock");
        assert_eq!(state.location, Location::SecurityStation);
        assert!(state.message.starts_with("You aren't sure"));

        let mut state = WorldState::at(Location::ManagersOffice);
        go(&mut state, "breaker");
        assert_eq!(state.location, Location::ManagersOffice);
        assert!(state.message.contains("without the map details"));

        state.record(Fact::MapDiscovered);
        go(&mut state, "breaker");
        assert_eq!(state.location, Location::LoadingDock);
    }

    #[test]
    fn test_first_declared_route_wins() {
        // "office" and "security" both match from the dock; office is declared first
        let route = find_route(Location::LoadingDock, "security office").unwrap();
        assert_eq!(route.to, Location::ManagersOffice);
    }

    #[test]
    fn test_no_routes_outside() {
        assert_eq!(routes_from(Location::Escaped).count(), 0);
        let mut state = WorldState::at(Location::Escaped);
        go(&mut state, "security");
        assert_eq!(state.location, Location::Escaped);
    }

    #[test]
    fn test_keywords_do_not_collide_within_a_location() {
        for location in Location::ALL {
            let routes: Vec<_> = routes_from(location).collect();
            for (i, a) in routes.iter().enumerate() {
                for b in &routes[i + 1..] {
                    for (first, second) in [(a, b), (b, a)] {
                        for kw in first.keywords {
                            assert!(
                                !second.matches(kw),
                                "{:?}: keyword '{}' reaches both {:?} and {:?}",
                                location,
                                kw,
                                first.to,
                                second.to
                            );
                        }
                    }
                }
            }
        }
    }
}

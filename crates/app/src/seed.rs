//! Demo seed data — the only path by which zones come into existence.
//!
//! Zone `"6"` deliberately references the nonexistent group `g3`: the system
//! tolerates dangling memberships (the zone shows up in no group and is not
//! an orphan), and the seed keeps that edge case reachable.

use zoneboard_domain::group::Group;
use zoneboard_domain::id::{GroupId, ZoneId};
use zoneboard_domain::zone::Zone;

/// The demo groups.
#[must_use]
pub fn groups() -> Vec<Group> {
    vec![group("g1", "Ground floor"), group("g2", "Upstairs")]
}

/// The demo zones.
#[must_use]
pub fn zones() -> Vec<Zone> {
    vec![
        zone("1", Some("g1"), "Living Room", 21, 22, true),
        zone("2", Some("g1"), "Kitchen", 23, 21, true),
        zone("3", Some("g2"), "Main Bedroom", 24, 20, false),
        zone("4", None, "Guest Room", 19, 22, false),
        zone("5", Some("g2"), "Office", 22, 23, true),
        zone("6", Some("g3"), "Bathroom", 20, 24, true),
        zone("7", Some("g1"), "Dining Room", 21, 21, false),
        zone("8", Some("g1"), "Basement", 17, 19, true),
        zone("9", Some("g1"), "Garage", 15, 18, false),
        zone("10", Some("g2"), "Kids Bedroom", 23, 22, true),
    ]
}

fn group(id: &str, name: &str) -> Group {
    Group {
        id: GroupId::new(id),
        name: name.to_string(),
    }
}

fn zone(
    id: &str,
    group_id: Option<&str>,
    name: &str,
    ambient_temp: i32,
    set_point: i32,
    is_on: bool,
) -> Zone {
    Zone {
        id: ZoneId::new(id),
        group_id: group_id.map(GroupId::new),
        name: name.to_string(),
        ambient_temp,
        set_point,
        is_on,
    }
}

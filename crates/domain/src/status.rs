//! Status classification — what a zone is currently doing.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::zone::Zone;

/// Operating status derived from the power flag and the two temperatures.
///
/// Never stored: recomputed from the current readings on every read, so it
/// can't go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoneStatus {
    Off,
    Cooling,
    Heating,
    Comfort,
}

impl std::fmt::Display for ZoneStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::Cooling => f.write_str("cooling"),
            Self::Heating => f.write_str("heating"),
            Self::Comfort => f.write_str("comfort"),
        }
    }
}

impl Zone {
    /// Classify what the zone is doing right now.
    ///
    /// A powered-off zone is [`Off`](ZoneStatus::Off) no matter the
    /// temperatures. Otherwise the ambient reading is compared against the
    /// set point: above means the system is cooling down to it, below means
    /// heating up, equal means comfort. Total over any pair of integers.
    #[must_use]
    pub fn status(&self) -> ZoneStatus {
        if !self.is_on {
            return ZoneStatus::Off;
        }
        match self.ambient_temp.cmp(&self.set_point) {
            Ordering::Greater => ZoneStatus::Cooling,
            Ordering::Less => ZoneStatus::Heating,
            Ordering::Equal => ZoneStatus::Comfort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_zone() -> Zone {
        Zone::builder()
            .id("zone-1")
            .name("Living Room")
            .ambient_temp(20)
            .set_point(20)
            .is_on(true)
            .build()
            .unwrap()
    }

    #[test]
    fn should_return_off_when_zone_is_turned_off() {
        let mut zone = base_zone();
        zone.is_on = false;
        assert_eq!(zone.status(), ZoneStatus::Off);
    }

    #[test]
    fn should_return_cooling_when_ambient_is_above_set_point() {
        let mut zone = base_zone();
        zone.ambient_temp = 25;
        zone.set_point = 20;
        assert_eq!(zone.status(), ZoneStatus::Cooling);
    }

    #[test]
    fn should_return_heating_when_ambient_is_below_set_point() {
        let mut zone = base_zone();
        zone.ambient_temp = 18;
        zone.set_point = 20;
        assert_eq!(zone.status(), ZoneStatus::Heating);
    }

    #[test]
    fn should_return_comfort_when_ambient_equals_set_point() {
        let zone = base_zone();
        assert_eq!(zone.status(), ZoneStatus::Comfort);
    }

    #[test]
    fn should_ignore_temperatures_when_off() {
        let mut zone = base_zone();
        zone.is_on = false;
        zone.ambient_temp = 30;
        zone.set_point = 10;
        assert_eq!(zone.status(), ZoneStatus::Off);
    }

    #[test]
    fn should_serialize_as_screaming_snake_case() {
        let json = serde_json::to_string(&ZoneStatus::Cooling).unwrap();
        assert_eq!(json, "\"COOLING\"");
        let parsed: ZoneStatus = serde_json::from_str("\"COMFORT\"").unwrap();
        assert_eq!(parsed, ZoneStatus::Comfort);
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(ZoneStatus::Off.to_string(), "off");
        assert_eq!(ZoneStatus::Heating.to_string(), "heating");
    }
}

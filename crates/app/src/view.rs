//! View models — derive what the dashboard shows from store snapshots.
//!
//! Both views follow the same lifecycle: seed synchronously from the store
//! (so the screen is never empty before the simulated fetch lands), issue a
//! one-shot façade fetch, subscribe for ongoing updates, and run their own
//! periodic drift ticker. Unmounting unsubscribes and stops the ticker; an
//! in-flight fetch is left to resolve into the shared state, where a late
//! arrival is harmless.
//!
//! Note the deliberate asymmetry carried over from the original design:
//! power toggles go through the façade (remote command), set-point steps
//! write the store directly (local, instant control).

pub mod detail;
pub mod zones;

pub use detail::ZoneDetailView;
pub use zones::{ZonesView, ZonesViewState};

use serde::Serialize;

use zoneboard_domain::status::ZoneStatus;
use zoneboard_domain::zone::Zone;

/// A zone plus its derived status, in the shape the presentation layer
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedZone {
    #[serde(flatten)]
    pub zone: Zone,
    #[serde(rename = "calculatedStatus")]
    pub calculated_status: ZoneStatus,
}

impl EnrichedZone {
    /// Enrich a zone with its current status.
    #[must_use]
    pub fn of(zone: Zone) -> Self {
        let calculated_status = zone.status();
        Self {
            zone,
            calculated_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoneboard_domain::id::ZoneId;

    #[test]
    fn should_compute_status_at_enrichment_time() {
        let zone = Zone {
            id: ZoneId::new("1"),
            group_id: None,
            name: "Living Room".to_string(),
            ambient_temp: 21,
            set_point: 22,
            is_on: true,
        };

        let enriched = EnrichedZone::of(zone);
        assert_eq!(enriched.calculated_status, ZoneStatus::Heating);
    }

    #[test]
    fn should_flatten_zone_fields_next_to_the_status_in_json() {
        let zone = Zone {
            id: ZoneId::new("1"),
            group_id: None,
            name: "Living Room".to_string(),
            ambient_temp: 25,
            set_point: 20,
            is_on: true,
        };

        let json = serde_json::to_value(EnrichedZone::of(zone)).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["ambientTemp"], 25);
        assert_eq!(json["calculatedStatus"], "COOLING");
    }
}

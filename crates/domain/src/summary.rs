//! Group power summary — the "All on / 2 of 3 on / All off" header line.

use serde::Serialize;

use crate::zone::Zone;

/// Aggregate power state of the zones in one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum GroupPowerSummary {
    /// The group has no zones at all.
    Empty,
    AllOn,
    AllOff,
    /// Some zones on, some off.
    Mixed { on: usize, total: usize },
}

impl GroupPowerSummary {
    /// Summarise the power state of `zones`.
    #[must_use]
    pub fn of<'a>(zones: impl IntoIterator<Item = &'a Zone>) -> Self {
        let mut total = 0;
        let mut on = 0;
        for zone in zones {
            total += 1;
            if zone.is_on {
                on += 1;
            }
        }
        match (on, total) {
            (_, 0) => Self::Empty,
            (0, _) => Self::AllOff,
            (on, total) if on == total => Self::AllOn,
            (on, total) => Self::Mixed { on, total },
        }
    }
}

impl std::fmt::Display for GroupPowerSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("No zones"),
            Self::AllOn => f.write_str("All on"),
            Self::AllOff => f.write_str("All off"),
            Self::Mixed { on, total } => write!(f, "{on} of {total} on"),
        }
    }
}

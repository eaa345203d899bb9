//! Zone — a thermostat-controlled area with a live temperature reading.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ZoneboardError};
use crate::id::{GroupId, ZoneId};

/// Lowest set point the adjustment controls will go to.
///
/// Enforced by the step-down operation only; a raw patch may still write any
/// value, matching the permissive store contract.
pub const MIN_SET_POINT: i32 = 10;

/// A single thermostat zone.
///
/// Temperatures are whole degrees. The current operating status is never a
/// field here — it is derived from `is_on`, `ambient_temp`, and `set_point`
/// on every read (see [`Zone::status`](crate::status)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: ZoneId,
    /// Group this zone belongs to, if any. May reference a group that no
    /// longer exists; such a zone shows up in no group and is not an orphan.
    pub group_id: Option<GroupId>,
    pub name: String,
    /// Current measured temperature.
    pub ambient_temp: i32,
    /// Target temperature.
    pub set_point: i32,
    pub is_on: bool,
}

impl Zone {
    /// Create a builder for constructing a [`Zone`].
    #[must_use]
    pub fn builder() -> ZoneBuilder {
        ZoneBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneboardError::Validation`] when `id` or `name` is empty.
    pub fn validate(&self) -> Result<(), ZoneboardError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyId.into());
        }
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Merge `patch` into this zone, field by field. Absent fields are left
    /// untouched.
    pub fn apply(&mut self, patch: ZonePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(group_id) = patch.group_id {
            self.group_id = group_id;
        }
        if let Some(ambient_temp) = patch.ambient_temp {
            self.ambient_temp = ambient_temp;
        }
        if let Some(set_point) = patch.set_point {
            self.set_point = set_point;
        }
        if let Some(is_on) = patch.is_on {
            self.is_on = is_on;
        }
    }
}

/// Partial update applied to a zone by id.
///
/// `group_id` nests an [`Option`] so a patch can distinguish "leave alone"
/// (`None`) from "detach from its group" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZonePatch {
    pub name: Option<String>,
    pub group_id: Option<Option<GroupId>>,
    pub ambient_temp: Option<i32>,
    pub set_point: Option<i32>,
    pub is_on: Option<bool>,
}

impl ZonePatch {
    /// An empty patch; chain field setters onto it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn group(mut self, group_id: Option<GroupId>) -> Self {
        self.group_id = Some(group_id);
        self
    }

    #[must_use]
    pub fn ambient_temp(mut self, ambient_temp: i32) -> Self {
        self.ambient_temp = Some(ambient_temp);
        self
    }

    #[must_use]
    pub fn set_point(mut self, set_point: i32) -> Self {
        self.set_point = Some(set_point);
        self
    }

    #[must_use]
    pub fn power(mut self, is_on: bool) -> Self {
        self.is_on = Some(is_on);
        self
    }
}

/// Step-by-step builder for [`Zone`].
#[derive(Debug, Default)]
pub struct ZoneBuilder {
    id: Option<ZoneId>,
    group_id: Option<GroupId>,
    name: Option<String>,
    ambient_temp: Option<i32>,
    set_point: Option<i32>,
    is_on: bool,
}

impl ZoneBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<ZoneId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn group_id(mut self, group_id: impl Into<GroupId>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn ambient_temp(mut self, ambient_temp: i32) -> Self {
        self.ambient_temp = Some(ambient_temp);
        self
    }

    #[must_use]
    pub fn set_point(mut self, set_point: i32) -> Self {
        self.set_point = Some(set_point);
        self
    }

    #[must_use]
    pub fn is_on(mut self, is_on: bool) -> Self {
        self.is_on = is_on;
        self
    }

    /// Consume the builder, validate, and return a [`Zone`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoneboardError::Validation`] if `id` or `name` is missing
    /// or empty.
    pub fn build(self) -> Result<Zone, ZoneboardError> {
        let zone = Zone {
            id: self.id.unwrap_or_else(|| ZoneId::new("")),
            group_id: self.group_id,
            name: self.name.unwrap_or_default(),
            ambient_temp: self.ambient_temp.unwrap_or_default(),
            set_point: self.set_point.unwrap_or_default(),
            is_on: self.is_on,
        };
        zone.validate()?;
        Ok(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_zone_when_id_and_name_provided() {
        let zone = Zone::builder()
            .id("1")
            .name("Living Room")
            .ambient_temp(21)
            .set_point(22)
            .is_on(true)
            .build()
            .unwrap();

        assert_eq!(zone.id, ZoneId::new("1"));
        assert_eq!(zone.name, "Living Room");
        assert!(zone.group_id.is_none());
        assert!(zone.is_on);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Zone::builder().id("1").build();
        assert!(matches!(
            result,
            Err(ZoneboardError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_id_is_missing() {
        let result = Zone::builder().name("Kitchen").build();
        assert!(matches!(
            result,
            Err(ZoneboardError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_build_zone_with_group() {
        let zone = Zone::builder()
            .id("2")
            .name("Kitchen")
            .group_id("g1")
            .build()
            .unwrap();

        assert_eq!(zone.group_id, Some(GroupId::new("g1")));
    }

    #[test]
    fn should_apply_patch_fields_and_leave_the_rest() {
        let mut zone = Zone::builder()
            .id("1")
            .name("Living Room")
            .ambient_temp(21)
            .set_point(22)
            .is_on(true)
            .build()
            .unwrap();

        zone.apply(ZonePatch::new().power(false));

        assert!(!zone.is_on);
        assert_eq!(zone.ambient_temp, 21);
        assert_eq!(zone.set_point, 22);
        assert_eq!(zone.name, "Living Room");
    }

    #[test]
    fn should_detach_group_through_nested_option_patch() {
        let mut zone = Zone::builder()
            .id("2")
            .name("Kitchen")
            .group_id("g1")
            .build()
            .unwrap();

        zone.apply(ZonePatch::new().group(None));

        assert!(zone.group_id.is_none());
    }

    #[test]
    fn should_not_touch_group_when_patch_omits_it() {
        let mut zone = Zone::builder()
            .id("2")
            .name("Kitchen")
            .group_id("g1")
            .build()
            .unwrap();

        zone.apply(ZonePatch::new().set_point(25));

        assert_eq!(zone.group_id, Some(GroupId::new("g1")));
        assert_eq!(zone.set_point, 25);
    }

    #[test]
    fn should_roundtrip_through_serde_json_with_camel_case_fields() {
        let zone = Zone::builder()
            .id("1")
            .name("Living Room")
            .group_id("g1")
            .ambient_temp(21)
            .set_point(22)
            .is_on(true)
            .build()
            .unwrap();

        let json = serde_json::to_value(&zone).unwrap();
        assert_eq!(json["groupId"], "g1");
        assert_eq!(json["ambientTemp"], 21);
        assert_eq!(json["setPoint"], 22);
        assert_eq!(json["isOn"], true);

        let parsed: Zone = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, zone);
    }
}

//! Group — a logical collection of zones (a floor, a wing, an apartment).

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ZoneboardError};
use crate::id::GroupId;

/// A logical grouping of zones.
///
/// Groups own nothing: membership lives on each zone's `group_id`. Deleting
/// a group releases its members rather than deleting them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
}

impl Group {
    /// Create a builder for constructing a [`Group`].
    #[must_use]
    pub fn builder() -> GroupBuilder {
        GroupBuilder::default()
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
}

/// Step-by-step builder for [`Group`].
#[derive(Debug, Default)]
pub struct GroupBuilder {
    id: Option<GroupId>,
    name: Option<String>,
}

impl GroupBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<GroupId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Group`].
    ///
    /// # Errors
    ///
    /// Returns [`ZoneboardError::Validation`] if `id` or `name` is missing
    /// or empty.
    pub fn build(self) -> Result<Group, ZoneboardError> {
        let group = Group {
            id: self.id.unwrap_or_else(|| GroupId::new("")),
            name: self.name.unwrap_or_default(),
        };
        group.validate()?;
        Ok(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_group_when_id_and_name_provided() {
        let group = Group::builder().id("g1").name("Ground floor").build().unwrap();
        assert_eq!(group.id, GroupId::new("g1"));
        assert_eq!(group.name, "Ground floor");
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = Group::builder().id("g1").build();
        assert!(matches!(
            result,
            Err(ZoneboardError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_id_is_empty() {
        let result = Group::builder().id("").name("Ground floor").build();
        assert!(matches!(
            result,
            Err(ZoneboardError::Validation(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let group = Group::builder().id("g2").name("Upstairs").build().unwrap();
        let json = serde_json::to_string(&group).unwrap();
        let parsed: Group = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }
}

//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.
//! The store itself is deliberately infallible — writes to unknown ids are
//! silent no-ops — so errors only surface at validation and lookup
//! boundaries.

use thiserror::Error;

/// Top-level error for the zoneboard workspace.
#[derive(Debug, Error)]
pub enum ZoneboardError {
    #[error("Validation error")]
    Validation(#[from] ValidationError),

    #[error("Not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant was violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("identifier must not be empty")]
    EmptyId,
}

/// A lookup by id found nothing.
#[derive(Debug, Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of thing looked up (`"Zone"`, `"Group"`).
    pub entity: &'static str,
    /// The id that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_top_level_error() {
        let err: ZoneboardError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            ZoneboardError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Zone",
            id: "7".to_string(),
        };
        assert_eq!(err.to_string(), "Zone 7 not found");
    }
}

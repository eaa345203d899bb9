//! # zoneboard-domain
//!
//! Pure domain model for the zoneboard climate-control dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Zones** (thermostat-controlled areas with a live temperature
//!   reading, a target set point, and a power flag)
//! - Define **Groups** (logical collections of zones: floors, wings, rooms)
//! - Pure derivations: status classification and group power summaries
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod group;
pub mod id;
pub mod status;
pub mod summary;
pub mod zone;

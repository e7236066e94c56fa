//! Model Module
//!
//! The animal record and the shape check applied to incoming records.
//!
//! ## Responsibilities
//! - Strongly-typed record with its camelCase wire names
//! - Truthy/type validation of untyped request bodies
//! - Fail-closed conversion from a validated body into a record

mod animal;
mod validator;

pub use animal::{Animal, AnimalDraft};
pub use validator::validate_animal;

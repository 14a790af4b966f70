//! Domain building blocks shared by the database and HTTP layers.
//!
//! Nothing in this crate touches the network or the database: it holds the
//! error type, id/time aliases, status enums, and the pure permission and
//! validation rules that the API layer enforces.

pub mod error;
pub mod permissions;
pub mod roles;
pub mod sprint_rules;
pub mod status;
pub mod types;
pub mod validation;

//! Shared domain foundation for the reelcraft backend.
//!
//! Holds the error taxonomy, record id / timestamp aliases, collection
//! capacity limits, and input validation helpers used by the db and api
//! crates.

pub mod error;
pub mod limits;
pub mod types;
pub mod validation;

pub use error::CoreError;

//! # pk-core
//!
//! Shared foundation for ProbKit: the error taxonomy every crate reports
//! through, and the core data model (named probabilistic variables and
//! Expected-Value outcome pairs).

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Outcome, Variable, VariableSet};

/// Crate version, shared by the CLI and server front ends.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

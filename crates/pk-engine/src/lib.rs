//! # pk-engine
//!
//! The ProbKit dispatcher: validates a [`CalculationRequest`] at the
//! boundary and routes it to exactly one pure computation in `pk-prob`,
//! `pk-inference`, or `pk-scenarios`.
//!
//! No component here or below retains state between calls; identical
//! requests always produce identical outputs.

#![warn(missing_docs)]

/// Boundary validation and routing.
pub mod dispatch;
/// Request and output types.
pub mod request;

pub use dispatch::dispatch;
pub use request::{CalcParams, CalcType, CalculationOutput, CalculationRequest};

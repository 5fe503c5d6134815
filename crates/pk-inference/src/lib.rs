//! # pk-inference
//!
//! Statistical inference for ProbKit: descriptive statistics and the
//! classical hypothesis tests the engine exposes.
//!
//! Every function takes its full sample as an argument and returns a
//! result value; nothing is cached or shared between calls.

#![warn(missing_docs)]

/// Descriptive statistics over a raw sample.
pub mod descriptive;
/// Pooled two-proportion Z-test.
pub mod proportion;
/// One-sample Student's t-test.
pub mod ttest;
/// One-sample Z-test with known population standard deviation.
pub mod ztest;

pub use descriptive::{describe, SampleSummary};
pub use proportion::TwoProportionResult;
pub use ttest::TTestResult;
pub use ztest::ZTestResult;

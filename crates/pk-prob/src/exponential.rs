//! Exponential distribution interval probabilities.

use pk_core::{Error, Result};

/// CDF of an Exponential distribution with rate `rate` at `x`:
/// `1 - e^(-λx)` for `x >= 0`, else 0.
pub fn cdf(x: f64, rate: f64) -> Result<f64> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(Error::Domain(format!("rate must be finite and > 0, got {}", rate)));
    }
    if x < 0.0 {
        return Ok(0.0);
    }
    // 1 - e^(-λx) via exp_m1 to avoid cancellation for small λx.
    Ok(-(-rate * x).exp_m1())
}

/// `P(lower <= X <= upper)` for `X ~ Exp(rate)`.
///
/// `upper >= lower` is a caller precondition, not runtime-checked; negative
/// round-off from the CDF difference is clamped to 0.
pub fn interval_probability(rate: f64, lower: f64, upper: f64) -> Result<f64> {
    let p = cdf(upper, rate)? - cdf(lower, rate)?;
    Ok(p.max(0.0))
}

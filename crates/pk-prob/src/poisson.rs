//! Poisson distribution utilities.

use crate::math::ln_factorial;
use pk_core::{Error, Result};

/// Log-PMF of a Poisson distribution with mean `lambda` at count `k`.
pub fn logpmf(k: u64, lambda: f64) -> Result<f64> {
    if !lambda.is_finite() || lambda < 0.0 {
        return Err(Error::Domain(format!("lambda must be finite and >= 0, got {}", lambda)));
    }
    if lambda == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }

    let kf = k as f64;
    Ok(kf * lambda.ln() - lambda - ln_factorial(k))
}

/// PMF `P(X = k) = λ^k·e^(-λ) / k!`.
pub fn pmf(k: u64, lambda: f64) -> Result<f64> {
    Ok(logpmf(k, lambda)?.exp())
}

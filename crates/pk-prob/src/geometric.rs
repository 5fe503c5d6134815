//! Geometric distribution utilities (1-indexed: trial of first success).

use pk_core::{Error, Result};

/// Log-PMF of a Geometric distribution at trial `k`: first success on the
/// k-th attempt, `P(X = k) = (1-p)^(k-1)·p`.
pub fn logpmf(k: u64, p: f64) -> Result<f64> {
    if !p.is_finite() || p <= 0.0 || p > 1.0 {
        return Err(Error::Domain(format!("p must be in (0,1], got {}", p)));
    }
    if k < 1 {
        return Err(Error::Domain(format!("k must be >= 1, got {}", k)));
    }

    // p = 1: the first trial always succeeds.
    if p == 1.0 {
        return Ok(if k == 1 { 0.0 } else { f64::NEG_INFINITY });
    }
    Ok(((k - 1) as f64) * (1.0 - p).ln() + p.ln())
}

/// PMF `P(X = k) = (1-p)^(k-1)·p`.
pub fn pmf(k: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, p)?.exp())
}

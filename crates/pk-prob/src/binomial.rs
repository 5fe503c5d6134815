//! Binomial distribution utilities.

use crate::math::ln_choose;
use pk_core::{Error, Result};

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Domain(format!("p must be finite and in [0,1], got {}", p)));
    }
    if k > n {
        return Err(Error::Domain(format!("k must be <= n, got k={} n={}", k, n)));
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln())
}

/// PMF `P(X = k) = C(n,k)·p^k·(1-p)^(n-k)`.
///
/// Evaluated through the log-space form, which stays finite where the
/// direct product would overflow the binomial coefficient.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, n, p)?.exp())
}

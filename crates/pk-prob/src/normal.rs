//! Normal distribution interval probabilities.

use crate::math;
use pk_core::{Error, Result};

/// CDF of `N(mu, sigma)` at `x`: `0.5·(1 + erf((x - mu)/(σ√2)))`.
pub fn cdf(x: f64, mu: f64, sigma: f64) -> Result<f64> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(Error::Domain(format!("sigma must be finite and > 0, got {}", sigma)));
    }
    Ok(math::normal_cdf((x - mu) / sigma))
}

/// `P(lower <= X <= upper)` for `X ~ N(mu, sigma)`.
///
/// `upper >= lower` is a caller precondition, not runtime-checked; negative
/// round-off from the CDF difference is clamped to 0.
pub fn interval_probability(mu: f64, sigma: f64, lower: f64, upper: f64) -> Result<f64> {
    let p = cdf(upper, mu, sigma)? - cdf(lower, mu, sigma)?;
    Ok(p.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_sigma_interval() {
        // P(-1 ≤ Z ≤ 1) ≈ 0.682689
        let p = interval_probability(0.0, 1.0, -1.0, 1.0).unwrap();
        assert_relative_eq!(p, 0.682_689_492_137_086, epsilon = 1e-9);
    }

    #[test]
    fn test_full_line_is_one() {
        // ±8σ truncation carries all representable mass.
        let p = interval_probability(0.0, 1.0, -8.0, 8.0).unwrap();
        assert!((1.0 - p).abs() < 1e-12);
    }

    #[test]
    fn test_location_scale_shift() {
        let centered = interval_probability(0.0, 1.0, -1.0, 1.0).unwrap();
        let shifted = interval_probability(10.0, 2.0, 8.0, 12.0).unwrap();
        assert_relative_eq!(centered, shifted, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_interval_is_zero() {
        let p = interval_probability(0.0, 1.0, 0.7, 0.7).unwrap();
        assert!(p >= 0.0 && p < 1e-15);
    }

    #[test]
    fn test_invalid_sigma() {
        assert!(matches!(cdf(0.0, 0.0, 0.0).unwrap_err(), Error::Domain(_)));
        assert!(matches!(cdf(0.0, 0.0, -1.0).unwrap_err(), Error::Domain(_)));
    }
}

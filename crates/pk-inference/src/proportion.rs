//! Pooled two-proportion Z-test.

use pk_core::{Error, Result};
use pk_prob::math::normal_cdf;
use serde::{Deserialize, Serialize};

/// Result of a pooled two-proportion Z-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoProportionResult {
    /// Observed conversion rate in group A.
    pub rate_a: f64,
    /// Observed conversion rate in group B.
    pub rate_b: f64,
    /// Z statistic: `(p_B - p_A) / SE_pooled`.
    pub z: f64,
    /// Two-tailed p-value.
    pub p_value: f64,
    /// `1 - p_value`.
    pub confidence: f64,
}

/// Test `H0: p_A = p_B` using the pooled proportion
/// `p̂ = (x_A + x_B)/(n_A + n_B)` and pooled standard error
/// `√(p̂(1-p̂)(1/n_A + 1/n_B))`.
///
/// When the pooled SE is exactly zero (no conversions at all, or nothing
/// but conversions), the test degenerates and the fixed pair
/// `(p_value, confidence) = (0.0, 1.0)` is returned with `z = 0`.
pub fn two_sample_z(
    conversions_a: u64,
    visitors_a: u64,
    conversions_b: u64,
    visitors_b: u64,
) -> Result<TwoProportionResult> {
    if visitors_a == 0 || visitors_b == 0 {
        return Err(Error::Domain("visitor counts must be positive".to_string()));
    }
    if conversions_a > visitors_a || conversions_b > visitors_b {
        return Err(Error::Domain(format!(
            "conversions cannot exceed visitors ({}/{}, {}/{})",
            conversions_a, visitors_a, conversions_b, visitors_b
        )));
    }

    let n_a = visitors_a as f64;
    let n_b = visitors_b as f64;
    let rate_a = conversions_a as f64 / n_a;
    let rate_b = conversions_b as f64 / n_b;

    let pooled = (conversions_a + conversions_b) as f64 / (n_a + n_b);
    let pooled_se = (pooled * (1.0 - pooled) * (1.0 / n_a + 1.0 / n_b)).sqrt();

    if pooled_se == 0.0 {
        return Ok(TwoProportionResult { rate_a, rate_b, z: 0.0, p_value: 0.0, confidence: 1.0 });
    }

    let z = (rate_b - rate_a) / pooled_se;
    let p_value = 2.0 * (1.0 - normal_cdf(z.abs()));

    Ok(TwoProportionResult { rate_a, rate_b, z, p_value, confidence: 1.0 - p_value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clear_uplift_is_significant() {
        // 10% vs 20% over 1000 visitors each.
        let r = two_sample_z(100, 1000, 200, 1000).unwrap();
        assert_relative_eq!(r.rate_a, 0.1, epsilon = 1e-15);
        assert_relative_eq!(r.rate_b, 0.2, epsilon = 1e-15);
        assert!(r.z > 0.0);
        assert!(r.confidence >= 0.95, "confidence = {}", r.confidence);
    }

    #[test]
    fn test_statistic_matches_manual_computation() {
        let r = two_sample_z(40, 400, 60, 400).unwrap();
        let pooled: f64 = 100.0 / 800.0;
        let se = (pooled * (1.0 - pooled) * (2.0 / 400.0)).sqrt();
        assert_relative_eq!(r.z, (0.15 - 0.10) / se, epsilon = 1e-12);
        assert_relative_eq!(r.confidence, 1.0 - r.p_value, epsilon = 1e-15);
    }

    #[test]
    fn test_identical_groups_not_significant() {
        let r = two_sample_z(50, 500, 50, 500).unwrap();
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-15);
        assert_relative_eq!(r.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_pooled_se() {
        // No conversions anywhere: pooled p̂ = 0 and SE = 0.
        let r = two_sample_z(0, 100, 0, 200).unwrap();
        assert_eq!(r.z, 0.0);
        assert_eq!(r.p_value, 0.0);
        assert_eq!(r.confidence, 1.0);

        // All conversions everywhere: pooled p̂ = 1 and SE = 0.
        let r = two_sample_z(100, 100, 200, 200).unwrap();
        assert_eq!(r.p_value, 0.0);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(two_sample_z(0, 0, 1, 10).unwrap_err(), Error::Domain(_)));
        assert!(matches!(two_sample_z(11, 10, 1, 10).unwrap_err(), Error::Domain(_)));
    }
}

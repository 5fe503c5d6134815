//! A/B test significance.

use pk_core::Result;
use pk_inference::proportion::{self, TwoProportionResult};

/// Significance of an A/B conversion experiment.
///
/// Thin wrapper over the pooled two-proportion Z-test; the scenario's
/// contract is the `(p_value, confidence)` pair on the returned result.
pub fn significance(
    conversions_a: u64,
    visitors_a: u64,
    conversions_b: u64,
    visitors_b: u64,
) -> Result<TwoProportionResult> {
    proportion::two_sample_z(conversions_a, visitors_a, conversions_b, visitors_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegates_to_two_proportion() {
        let ab = significance(100, 1000, 200, 1000).unwrap();
        let direct = proportion::two_sample_z(100, 1000, 200, 1000).unwrap();
        assert_eq!(ab.p_value, direct.p_value);
        assert_eq!(ab.confidence, direct.confidence);
        assert!(ab.confidence >= 0.95);
    }
}

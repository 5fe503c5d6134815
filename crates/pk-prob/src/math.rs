//! Small numeric helpers shared across probability code.

use statrs::function::gamma::ln_gamma;

/// `ln(n choose k)` via log-gamma.
///
/// `ln C(n,k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)`. Callers must ensure
/// `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    debug_assert!(k <= n);
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}

/// Binomial coefficient `C(n, k)` as an `f64`, `None` when `k > n`.
///
/// Computed in log space and rounded; exact for every coefficient that fits
/// in the 53-bit mantissa, which covers all lottery-sized inputs.
pub fn choose(n: u64, k: u64) -> Option<f64> {
    if k > n {
        return None;
    }
    Some(ln_choose(n, k).exp().round())
}

/// `ln(n!)`
#[inline]
pub fn ln_factorial(n: u64) -> f64 {
    ln_gamma(n as f64 + 1.0)
}

/// Standard normal CDF.
///
/// Uses erfc for better numerical behavior in the tails:
/// `Φ(x) = 0.5 * erfc(-x / sqrt(2))`.
#[inline]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * statrs::function::erf::erfc(-x / std::f64::consts::SQRT_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_small_values_exact() {
        assert_eq!(choose(5, 0), Some(1.0));
        assert_eq!(choose(5, 5), Some(1.0));
        assert_eq!(choose(10, 3), Some(120.0));
        assert_eq!(choose(52, 5), Some(2_598_960.0));
        assert_eq!(choose(69, 5), Some(11_238_513.0));
        assert_eq!(choose(4, 5), None);
    }

    #[test]
    fn test_ln_choose_matches_pascal() {
        // C(n,k) = C(n-1,k-1) + C(n-1,k)
        for n in 2..30u64 {
            for k in 1..n {
                let lhs = ln_choose(n, k).exp();
                let rhs = ln_choose(n - 1, k - 1).exp() + ln_choose(n - 1, k).exp();
                assert!((lhs - rhs).abs() / rhs < 1e-12, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_normal_cdf_symmetry() {
        let xs: [f64; 5] = [0.0, 0.5, 1.0, 2.5, 6.0];
        for x in xs {
            let hi = normal_cdf(x);
            let lo = normal_cdf(-x);
            assert!((hi + lo - 1.0).abs() < 1e-15, "x={}", x);
        }
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn test_normal_cdf_known_value() {
        // Φ(1.96) ≈ 0.975 (the classic two-sided 95% point)
        assert!((normal_cdf(1.959_963_984_540_054) - 0.975).abs() < 1e-9);
    }
}

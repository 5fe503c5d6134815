//! Classical probability calculus: joint, union, conditional, Bayes,
//! expected value.
//!
//! All functions assume independent events unless an intersection is
//! supplied explicitly. Probability-range validation happens at the engine
//! boundary; these functions only reject inputs that make the operation
//! itself undefined.

use pk_core::{Error, Outcome, Result};

/// Largest event count for which the union is computed by explicit subset
/// enumeration. Beyond this the complement-product identity is used, which
/// is exact under independence and O(n) instead of O(2^n).
pub const UNION_ENUMERATION_MAX_N: usize = 20;

/// Joint probability of independent events: `P(A ∩ B ∩ ...) = ∏ p_i`.
///
/// The empty product is 1.0 (multiplicative identity).
pub fn joint(probabilities: &[f64]) -> f64 {
    probabilities.iter().product()
}

/// Union probability `P(A ∪ B ∪ ...)` via the inclusion-exclusion
/// principle: the signed sum over all `2^n - 1` non-empty subsets,
/// `Σ_S (-1)^(|S|+1) ∏_{i∈S} p_i`.
///
/// Subset enumeration is exponential in the number of events; above
/// [`UNION_ENUMERATION_MAX_N`] the equivalent complement product
/// `1 - ∏(1 - p_i)` is used instead. Under independence both forms agree
/// to floating tolerance. The empty union is 0.0, and the result is
/// clamped to [0, 1] to absorb round-off.
pub fn union(probabilities: &[f64]) -> f64 {
    let n = probabilities.len();
    if n == 0 {
        return 0.0;
    }
    if n > UNION_ENUMERATION_MAX_N {
        return union_complement(probabilities);
    }

    let mut total = 0.0;
    // Bit i of `mask` selects probabilities[i]; every non-empty subset
    // appears exactly once.
    for mask in 1u64..(1u64 << n) {
        let mut term = 1.0;
        for (i, p) in probabilities.iter().enumerate() {
            if mask & (1 << i) != 0 {
                term *= p;
            }
        }
        if mask.count_ones() % 2 == 1 {
            total += term;
        } else {
            total -= term;
        }
    }
    total.clamp(0.0, 1.0)
}

/// `1 - ∏(1 - p_i)`: the probability that at least one event occurs,
/// as one minus the probability that none do.
fn union_complement(probabilities: &[f64]) -> f64 {
    let none: f64 = probabilities.iter().map(|p| 1.0 - p).product();
    (1.0 - none).clamp(0.0, 1.0)
}

/// Conditional probability `P(B|A) = P(A ∩ B) / P(A)`.
///
/// Uses `intersection` as `P(A ∩ B)` when supplied; otherwise falls back
/// to independence, `P(A ∩ B) = P(A)·P(B)`.
pub fn conditional(p_a: f64, p_b: f64, intersection: Option<f64>) -> Result<f64> {
    if p_a == 0.0 {
        return Err(Error::Domain(
            "cannot condition on an event with probability zero".to_string(),
        ));
    }
    let p_intersection = intersection.unwrap_or(p_a * p_b);
    Ok(p_intersection / p_a)
}

/// Posterior `P(A|B)` from prior `P(A)`, likelihood `P(B|A)`, and
/// complement likelihood `P(B|¬A)`:
///
/// `P(A|B) = P(B|A)·P(A) / [P(B|A)·P(A) + P(B|¬A)·(1 - P(A))]`
pub fn bayes_posterior(prior: f64, lik_given: f64, lik_given_not: f64) -> Result<f64> {
    let denominator = lik_given * prior + lik_given_not * (1.0 - prior);
    if denominator == 0.0 {
        return Err(Error::Domain(
            "total probability of the evidence is zero".to_string(),
        ));
    }
    Ok(lik_given * prior / denominator)
}

/// Expected value `E[X] = Σ outcome × probability`.
pub fn expected_value(outcomes: &[Outcome]) -> f64 {
    outcomes.iter().map(|o| o.value * o.probability).sum()
}

//! One-sample Z-test (known population standard deviation).

use pk_core::{Error, Result};
use pk_prob::math::normal_cdf;
use serde::{Deserialize, Serialize};

/// Result of a one-sample Z-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZTestResult {
    /// Sample mean.
    pub sample_mean: f64,
    /// Z statistic: `(x̄ - μ₀) / (σ/√n)`.
    pub z: f64,
    /// Two-tailed p-value: `2·(1 - Φ(|z|))`.
    pub p_value: f64,
}

/// Test `H0: μ = population_mean` against the two-sided alternative, with
/// the population standard deviation known.
pub fn one_sample(data: &[f64], population_mean: f64, population_std: f64) -> Result<ZTestResult> {
    if data.is_empty() {
        return Err(Error::Domain("z-test requires a non-empty sample".to_string()));
    }
    if !population_std.is_finite() || population_std <= 0.0 {
        return Err(Error::Domain(format!(
            "population std must be finite and > 0, got {}",
            population_std
        )));
    }

    let n = data.len() as f64;
    let sample_mean = data.iter().sum::<f64>() / n;
    let standard_error = population_std / n.sqrt();
    let z = (sample_mean - population_mean) / standard_error;
    let p_value = 2.0 * (1.0 - normal_cdf(z.abs()));

    Ok(ZTestResult { sample_mean, z, p_value })
}

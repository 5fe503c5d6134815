//! One-sample Student's t-test.

use pk_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Result of a one-sample t-test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TTestResult {
    /// t statistic: `(x̄ - μ₀) / (s/√n)` with `s` the sample std.
    pub t: f64,
    /// Degrees of freedom, `n - 1`.
    pub df: f64,
    /// Two-tailed p-value from the Student-t distribution.
    pub p_value: f64,
}

/// Test `H0: μ = population_mean` against the two-sided alternative, with
/// the population standard deviation estimated from the sample.
pub fn one_sample(data: &[f64], population_mean: f64) -> Result<TTestResult> {
    let n = data.len();
    if n < 2 {
        return Err(Error::Domain(format!("t-test requires at least 2 observations, got {}", n)));
    }

    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0);
    if variance == 0.0 {
        return Err(Error::Domain("t-test is undefined for a zero-variance sample".to_string()));
    }

    let standard_error = (variance / nf).sqrt();
    let t = (mean - population_mean) / standard_error;
    let df = nf - 1.0;

    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Domain(format!("t distribution with df={}: {}", df, e)))?;
    let p_value = 2.0 * (1.0 - dist.cdf(t.abs()));

    Ok(TTestResult { t, df, p_value })
}

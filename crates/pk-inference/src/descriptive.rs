//! Descriptive statistics over a raw sample.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Summary statistics for a non-empty sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median: the middle order statistic, or the midpoint of the two
    /// central ones for even n.
    pub median: f64,
    /// Mode: the most frequent value; ties resolve to the value that
    /// appears first in input order.
    pub mode: f64,
    /// Bessel-corrected sample variance (ddof = 1). NaN for n = 1;
    /// callers wanting a defined spread must supply n >= 2.
    pub variance: f64,
    /// Bessel-corrected sample standard deviation. NaN for n = 1.
    pub std_dev: f64,
    /// Fisher-Pearson skewness `g1 = m3 / m2^(3/2)` (biased moment form).
    /// 0.0 for a zero-spread sample.
    pub skewness: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Sample size.
    pub n: usize,
}

/// Compute summary statistics for `data`.
///
/// Returns `None` for an empty sample: the explicit empty result, not an
/// error.
pub fn describe(data: &[f64]) -> Option<SampleSummary> {
    if data.is_empty() {
        return None;
    }
    let n = data.len();
    let nf = n as f64;

    let mean = data.iter().sum::<f64>() / nf;

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);
    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    };

    let m2 = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / nf;
    let m3 = data.iter().map(|x| (x - mean).powi(3)).sum::<f64>() / nf;
    let skewness = if m2 == 0.0 { 0.0 } else { m3 / m2.powf(1.5) };

    let variance = if n == 1 {
        f64::NAN
    } else {
        data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (nf - 1.0)
    };

    Some(SampleSummary {
        mean,
        median,
        mode: mode_first_most_frequent(data),
        variance,
        std_dev: variance.sqrt(),
        skewness,
        min: sorted[0],
        max: sorted[n - 1],
        n,
    })
}

/// First most-frequent value: ties break toward the earliest first
/// occurrence in input order. Values are compared by exact bit pattern.
fn mode_first_most_frequent(data: &[f64]) -> f64 {
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new(); // bits -> (count, first index)
    for (i, &x) in data.iter().enumerate() {
        let entry = counts.entry(x.to_bits()).or_insert((0, i));
        entry.0 += 1;
    }
    let (&bits, _) = counts
        .iter()
        .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then(ib.cmp(ia)))
        .expect("non-empty by construction");
    f64::from_bits(bits)
}

//! Request and output types for the dispatcher.

use pk_core::VariableSet;
use pk_inference::SampleSummary;
use serde::{Deserialize, Serialize};

/// Calculation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalcType {
    /// Joint probability of all variables (product under independence).
    Joint,
    /// Union probability via inclusion-exclusion.
    Union,
    /// Conditional probability P(B|A) of two selected events.
    Conditional,
    /// Bayesian update from prior and two likelihoods.
    BayesTheorem,
    /// Binomial PMF at a success count.
    BinomialDistribution,
    /// Poisson PMF at an event count.
    PoissonDistribution,
    /// Normal interval probability.
    NormalInterval,
    /// Geometric PMF at a (1-indexed) trial number.
    GeometricDistribution,
    /// Exponential interval probability.
    ExponentialInterval,
    /// Expected value; variable names parse as the outcomes.
    ExpectedValue,
    /// Descriptive statistics over the `data` sample.
    DescriptiveStats,
    /// One-sample Z-test.
    ZTest,
    /// One-sample t-test.
    TTest,
    /// Two-proportion A/B significance test.
    ABTest,
    /// Lottery jackpot odds.
    LotteryOdds,
    /// Birthday paradox probability.
    BirthdayParadox,
    /// Poker out-hitting probability.
    PokerOuts,
    /// Gambler's-ruin risk.
    RiskOfRuin,
}

/// Calc-specific auxiliary parameters.
///
/// A flat bag of optionals: the dispatcher pulls what the selected
/// calculation needs and rejects requests that omit a required field.
/// Event-selector fields name variables in the request's [`VariableSet`];
/// numeric fields are passed through directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcParams {
    // --- Event selectors (Conditional / Bayes / p-lookups) ---
    /// Event A: the conditioning event, or the Bayes prior.
    pub event_a: Option<String>,
    /// Event B: the target event, or the P(B|A) likelihood variable.
    pub event_b: Option<String>,
    /// Name of the P(B|¬A) variable for Bayes' theorem.
    pub likelihood_complement: Option<String>,
    /// Known P(A∩B) for Conditional; independence fallback when absent.
    pub intersection: Option<f64>,
    /// Name of the variable holding the success probability for the
    /// binomial and geometric distributions.
    pub success_event: Option<String>,

    // --- Distribution shape parameters ---
    /// Number of trials (binomial).
    pub trials: Option<u64>,
    /// Number of successes (binomial). Signed so a negative count fails in
    /// the domain check rather than at deserialization.
    pub successes: Option<i64>,
    /// Event count `k` (Poisson) or trial index `k` (geometric).
    pub count: Option<i64>,
    /// Rate λ (Poisson, exponential).
    pub rate: Option<f64>,
    /// Mean μ (normal).
    pub mean: Option<f64>,
    /// Standard deviation σ (normal).
    pub std_dev: Option<f64>,
    /// Interval lower bound (normal, exponential).
    pub lower: Option<f64>,
    /// Interval upper bound (normal, exponential).
    pub upper: Option<f64>,

    // --- Sample-based tests ---
    /// Raw sample for descriptive stats and the Z/T tests.
    pub data: Option<Vec<f64>>,
    /// Hypothesized population mean μ₀.
    pub population_mean: Option<f64>,
    /// Known population standard deviation (Z-test).
    pub population_std: Option<f64>,

    // --- A/B test ---
    /// Conversions in group A.
    pub conversions_a: Option<u64>,
    /// Visitors in group A.
    pub visitors_a: Option<u64>,
    /// Conversions in group B.
    pub conversions_b: Option<u64>,
    /// Visitors in group B.
    pub visitors_b: Option<u64>,

    // --- Scenarios ---
    /// Main pool size (lottery).
    pub total_balls: Option<u64>,
    /// Picks from the main pool (lottery).
    pub balls_to_pick: Option<u64>,
    /// Bonus pool size (lottery); 0 means no bonus draw.
    pub bonus_balls: Option<u64>,
    /// Picks from the bonus pool (lottery).
    pub bonus_to_pick: Option<u64>,
    /// Group size (birthday paradox).
    pub n_people: Option<u64>,
    /// Number of outs (poker).
    pub outs: Option<u64>,
    /// Cards still to come: 1 or 2 (poker).
    pub cards_to_come: Option<u8>,
    /// Per-bet win probability (risk of ruin).
    pub win_rate: Option<f64>,
    /// Bankroll measured in bet units (risk of ruin).
    pub bankroll_units: Option<u32>,
}

/// A single calculation request: tag + ordered variables + aux parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Which calculation to run.
    pub calc_type: CalcType,
    /// Caller-owned variable store; may be empty for calcs that take only
    /// aux parameters.
    #[serde(default)]
    pub variables: VariableSet,
    /// Calc-specific parameters, flattened into the request object.
    #[serde(flatten)]
    pub params: CalcParams,
}

/// Result of a dispatched calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationOutput {
    /// A single probability / expectation / odds value.
    Scalar {
        /// The computed value.
        value: f64,
    },
    /// A hypothesis-test outcome.
    Test {
        /// Test statistic (z or t).
        statistic: f64,
        /// Two-tailed p-value.
        p_value: f64,
        /// `1 - p_value`, reported by the A/B significance test.
        #[serde(skip_serializing_if = "Option::is_none")]
        confidence: Option<f64>,
    },
    /// Descriptive summary; `None` is the explicit empty-sample result.
    Summary {
        /// The summary, absent for an empty sample.
        summary: Option<SampleSummary>,
    },
}

impl CalculationOutput {
    pub(crate) fn scalar(value: f64) -> Self {
        Self::Scalar { value }
    }

    /// The scalar value, for callers that only consume single-value calcs.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar { value } => Some(*value),
            _ => None,
        }
    }
}

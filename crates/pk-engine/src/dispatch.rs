//! Boundary validation and routing.

use pk_core::{Error, Outcome, Result, VariableSet};
use pk_inference::{descriptive, ttest, ztest};
use pk_prob::{binomial, calculus, exponential, geometric, normal, poisson};
use pk_scenarios::{abtest, birthday, lottery, poker, ruin};

use crate::request::{CalcType, CalculationOutput, CalculationRequest};

/// Validate a request and route it to the matching pure function.
///
/// Boundary checks run first, before any math: every supplied variable must
/// be a finite probability in [0, 1] (`Validation`). Individual
/// calculations then raise `Domain`/`Format`/`Lookup` errors per their own
/// contracts, and those kinds propagate to the caller unchanged.
pub fn dispatch(request: &CalculationRequest) -> Result<CalculationOutput> {
    validate_variables(&request.variables)?;
    let vars = &request.variables;
    let params = &request.params;

    match request.calc_type {
        CalcType::Joint => {
            let probs: Vec<f64> = vars.values().collect();
            Ok(CalculationOutput::scalar(calculus::joint(&probs)))
        }

        CalcType::Union => {
            let probs: Vec<f64> = vars.values().collect();
            Ok(CalculationOutput::scalar(calculus::union(&probs)))
        }

        CalcType::Conditional => {
            let p_a = lookup(vars, require_name(&params.event_a, "event_a")?)?;
            let p_b = lookup(vars, require_name(&params.event_b, "event_b")?)?;
            calculus::conditional(p_a, p_b, params.intersection).map(CalculationOutput::scalar)
        }

        CalcType::BayesTheorem => {
            let prior = lookup(vars, require_name(&params.event_a, "event_a")?)?;
            let lik_given = lookup(vars, require_name(&params.event_b, "event_b")?)?;
            let lik_given_not =
                lookup(vars, require_name(&params.likelihood_complement, "likelihood_complement")?)?;
            calculus::bayes_posterior(prior, lik_given, lik_given_not)
                .map(CalculationOutput::scalar)
        }

        CalcType::ExpectedValue => {
            let outcomes = parse_outcomes(vars)?;
            Ok(CalculationOutput::scalar(calculus::expected_value(&outcomes)))
        }

        CalcType::BinomialDistribution => {
            let p = lookup(vars, require_name(&params.success_event, "success_event")?)?;
            let n = require(params.trials, "trials")?;
            let k = non_negative(require(params.successes, "successes")?, "successes")?;
            binomial::pmf(k, n, p).map(CalculationOutput::scalar)
        }

        CalcType::PoissonDistribution => {
            let rate = require(params.rate, "rate")?;
            let k = non_negative(require(params.count, "count")?, "count")?;
            poisson::pmf(k, rate).map(CalculationOutput::scalar)
        }

        CalcType::NormalInterval => {
            let mean = require(params.mean, "mean")?;
            let std_dev = require(params.std_dev, "std_dev")?;
            let lower = require(params.lower, "lower")?;
            let upper = require(params.upper, "upper")?;
            normal::interval_probability(mean, std_dev, lower, upper)
                .map(CalculationOutput::scalar)
        }

        CalcType::GeometricDistribution => {
            let p = lookup(vars, require_name(&params.success_event, "success_event")?)?;
            let k = non_negative(require(params.count, "count")?, "count")?;
            geometric::pmf(k, p).map(CalculationOutput::scalar)
        }

        CalcType::ExponentialInterval => {
            let rate = require(params.rate, "rate")?;
            let lower = require(params.lower, "lower")?;
            let upper = require(params.upper, "upper")?;
            exponential::interval_probability(rate, lower, upper).map(CalculationOutput::scalar)
        }

        CalcType::DescriptiveStats => {
            let data = require_data(params.data.as_deref())?;
            Ok(CalculationOutput::Summary { summary: descriptive::describe(data) })
        }

        CalcType::ZTest => {
            let data = require_data(params.data.as_deref())?;
            let mu0 = require(params.population_mean, "population_mean")?;
            let sigma = require(params.population_std, "population_std")?;
            let r = ztest::one_sample(data, mu0, sigma)?;
            Ok(CalculationOutput::Test { statistic: r.z, p_value: r.p_value, confidence: None })
        }

        CalcType::TTest => {
            let data = require_data(params.data.as_deref())?;
            let mu0 = require(params.population_mean, "population_mean")?;
            let r = ttest::one_sample(data, mu0)?;
            Ok(CalculationOutput::Test { statistic: r.t, p_value: r.p_value, confidence: None })
        }

        CalcType::ABTest => {
            let r = abtest::significance(
                require(params.conversions_a, "conversions_a")?,
                require(params.visitors_a, "visitors_a")?,
                require(params.conversions_b, "conversions_b")?,
                require(params.visitors_b, "visitors_b")?,
            )?;
            Ok(CalculationOutput::Test {
                statistic: r.z,
                p_value: r.p_value,
                confidence: Some(r.confidence),
            })
        }

        CalcType::LotteryOdds => {
            let total = require(params.total_balls, "total_balls")?;
            let pick = require(params.balls_to_pick, "balls_to_pick")?;
            let bonus = params.bonus_balls.unwrap_or(0);
            let bonus_pick = params.bonus_to_pick.unwrap_or(0);
            Ok(CalculationOutput::scalar(lottery::jackpot_probability(
                total, pick, bonus, bonus_pick,
            )))
        }

        CalcType::BirthdayParadox => {
            let n_people = require(params.n_people, "n_people")?;
            Ok(CalculationOutput::scalar(birthday::shared_birthday_probability(n_people)))
        }

        CalcType::PokerOuts => {
            let outs = require(params.outs, "outs")?;
            let draws = require(params.cards_to_come, "cards_to_come")?;
            poker::hit_probability(outs, draws).map(CalculationOutput::scalar)
        }

        CalcType::RiskOfRuin => {
            let win_rate = require(params.win_rate, "win_rate")?;
            if !win_rate.is_finite() || !(0.0..=1.0).contains(&win_rate) {
                return Err(Error::Validation(format!(
                    "win_rate must be a probability in [0,1], got {}",
                    win_rate
                )));
            }
            let units = require(params.bankroll_units, "bankroll_units")?;
            Ok(CalculationOutput::scalar(ruin::risk_of_ruin(win_rate, units)))
        }
    }
}

/// Every variable value must be a finite probability in [0, 1]. This is the
/// single validation boundary; calculus functions assume it has run.
fn validate_variables(vars: &VariableSet) -> Result<()> {
    for v in vars.iter() {
        if !v.value.is_finite() || !(0.0..=1.0).contains(&v.value) {
            return Err(Error::Validation(format!(
                "variable `{}` must be a probability in [0,1], got {}",
                v.name, v.value
            )));
        }
    }
    Ok(())
}

fn lookup(vars: &VariableSet, name: &str) -> Result<f64> {
    vars.get(name)
        .ok_or_else(|| Error::Lookup(format!("event `{}` not found in the variable set", name)))
}

fn require<T: Copy>(field: Option<T>, name: &str) -> Result<T> {
    field.ok_or_else(|| Error::Validation(format!("missing required parameter `{}`", name)))
}

fn require_name<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str> {
    field
        .as_deref()
        .ok_or_else(|| Error::Validation(format!("missing required parameter `{}`", name)))
}

fn require_data(data: Option<&[f64]>) -> Result<&[f64]> {
    data.ok_or_else(|| Error::Validation("missing required parameter `data`".to_string()))
}

fn non_negative(k: i64, name: &str) -> Result<u64> {
    u64::try_from(k)
        .map_err(|_| Error::Domain(format!("`{}` must be non-negative, got {}", name, k)))
}

/// Expected-Value mode: each variable's name parses as its numeric outcome.
fn parse_outcomes(vars: &VariableSet) -> Result<Vec<Outcome>> {
    vars.iter()
        .map(|v| {
            let value: f64 = v.name.trim().parse().map_err(|_| {
                Error::Format(format!(
                    "variable name `{}` does not parse as a numeric outcome",
                    v.name
                ))
            })?;
            Ok(Outcome { value, probability: v.value })
        })
        .collect()
}

//! End-to-end properties of the dispatcher, exercised through the public
//! request API the front ends use.

use approx::assert_relative_eq;
use pk_core::{Error, VariableSet};
use pk_engine::{dispatch, CalcParams, CalcType, CalculationOutput, CalculationRequest};

fn request(calc_type: CalcType) -> CalculationRequest {
    CalculationRequest { calc_type, variables: VariableSet::new(), params: CalcParams::default() }
}

fn scalar(req: &CalculationRequest) -> f64 {
    match dispatch(req).unwrap() {
        CalculationOutput::Scalar { value } => value,
        other => panic!("expected scalar, got {:?}", other),
    }
}

#[test]
fn joint_of_empty_set_is_one() {
    let req = request(CalcType::Joint);
    assert_eq!(scalar(&req), 1.0);
}

#[test]
fn union_of_empty_set_is_zero() {
    let req = request(CalcType::Union);
    assert_eq!(scalar(&req), 0.0);
}

#[test]
fn union_equals_complement_product_for_independent_events() {
    let probs = [0.12, 0.5, 0.33, 0.07, 0.81, 0.26];
    let mut req = request(CalcType::Union);
    for (i, p) in probs.iter().enumerate() {
        req.variables.insert(format!("e{}", i), *p);
    }
    let expected = 1.0 - probs.iter().map(|p| 1.0 - p).product::<f64>();
    assert_relative_eq!(scalar(&req), expected, epsilon = 1e-9);
}

#[test]
fn conditional_on_zero_probability_event_is_domain_error() {
    let mut req = request(CalcType::Conditional);
    req.variables.insert("a", 0.0);
    req.variables.insert("b", 0.5);
    req.params.event_a = Some("a".to_string());
    req.params.event_b = Some("b".to_string());
    assert!(matches!(dispatch(&req).unwrap_err(), Error::Domain(_)));
}

#[test]
fn bayes_matches_hand_computation() {
    let mut req = request(CalcType::BayesTheorem);
    req.variables.insert("disease", 0.1);
    req.variables.insert("pos_given_disease", 0.8);
    req.variables.insert("pos_given_healthy", 0.2);
    req.params.event_a = Some("disease".to_string());
    req.params.event_b = Some("pos_given_disease".to_string());
    req.params.likelihood_complement = Some("pos_given_healthy".to_string());
    assert_relative_eq!(scalar(&req), 0.08 / 0.26, epsilon = 1e-12);
}

#[test]
fn expected_value_parses_names_as_outcomes() {
    let mut req = request(CalcType::ExpectedValue);
    req.variables.insert("100", 0.25);
    req.variables.insert("-50", 0.75);
    assert_relative_eq!(scalar(&req), 100.0 * 0.25 - 50.0 * 0.75, epsilon = 1e-12);
}

#[test]
fn binomial_pmf_sums_to_one_over_support() {
    let n = 12u64;
    let mut total = 0.0;
    for k in 0..=n {
        let mut req = request(CalcType::BinomialDistribution);
        req.variables.insert("p", 0.37);
        req.params.success_event = Some("p".to_string());
        req.params.trials = Some(n);
        req.params.successes = Some(k as i64);
        total += scalar(&req);
    }
    assert_relative_eq!(total, 1.0, epsilon = 1e-9);
}

#[test]
fn normal_interval_over_full_line_is_one() {
    let mut req = request(CalcType::NormalInterval);
    req.params.mean = Some(0.0);
    req.params.std_dev = Some(1.0);
    req.params.lower = Some(-8.0);
    req.params.upper = Some(8.0);
    assert!((scalar(&req) - 1.0).abs() < 1e-12);
}

#[test]
fn birthday_paradox_landmarks() {
    for (n, expected) in [(23u64, 0.5073), (366, 1.0), (1, 0.0)] {
        let mut req = request(CalcType::BirthdayParadox);
        req.params.n_people = Some(n);
        let p = scalar(&req);
        assert!((p - expected).abs() < 1e-4, "n = {}: {}", n, p);
    }
}

#[test]
fn powerball_jackpot_odds() {
    let mut req = request(CalcType::LotteryOdds);
    req.params.total_balls = Some(69);
    req.params.balls_to_pick = Some(5);
    req.params.bonus_balls = Some(26);
    req.params.bonus_to_pick = Some(1);
    assert_relative_eq!(scalar(&req), 1.0 / 292_201_338.0, max_relative = 1e-9);
}

#[test]
fn ab_test_with_doubled_conversion_is_confident() {
    let mut req = request(CalcType::ABTest);
    req.params.conversions_a = Some(100);
    req.params.visitors_a = Some(1000);
    req.params.conversions_b = Some(200);
    req.params.visitors_b = Some(1000);
    match dispatch(&req).unwrap() {
        CalculationOutput::Test { confidence: Some(c), p_value, .. } => {
            assert!(c >= 0.95, "confidence = {}", c);
            assert_relative_eq!(c, 1.0 - p_value, epsilon = 1e-15);
        }
        other => panic!("expected test output, got {:?}", other),
    }
}

#[test]
fn risk_of_ruin_landmarks() {
    let mut req = request(CalcType::RiskOfRuin);
    req.params.win_rate = Some(0.5);
    req.params.bankroll_units = Some(10);
    assert_eq!(scalar(&req), 1.0);

    let mut req = request(CalcType::RiskOfRuin);
    req.params.win_rate = Some(0.6);
    req.params.bankroll_units = Some(10);
    assert_relative_eq!(scalar(&req), (0.4f64 / 0.6).powi(10), epsilon = 1e-12);
}

#[test]
fn descriptive_stats_empty_sample_is_explicit_empty() {
    let mut req = request(CalcType::DescriptiveStats);
    req.params.data = Some(vec![]);
    match dispatch(&req).unwrap() {
        CalculationOutput::Summary { summary } => assert!(summary.is_none()),
        other => panic!("expected summary output, got {:?}", other),
    }
}

#[test]
fn dispatch_is_deterministic() {
    let mut req = request(CalcType::Union);
    req.variables.insert("a", 0.2);
    req.variables.insert("b", 0.4);
    req.variables.insert("c", 0.6);
    let first = scalar(&req);
    for _ in 0..5 {
        assert_eq!(scalar(&req), first);
    }
}

#[test]
fn json_request_from_the_wire_dispatches() {
    let json = r#"{
        "calc_type": "ZTest",
        "data": [5.1, 4.9, 5.0, 5.2, 4.8, 5.05, 4.95, 5.0],
        "population_mean": 5.0,
        "population_std": 0.1
    }"#;
    let req: CalculationRequest = serde_json::from_str(json).unwrap();
    match dispatch(&req).unwrap() {
        CalculationOutput::Test { statistic, p_value, confidence } => {
            assert!(statistic.is_finite());
            assert!((0.0..=1.0).contains(&p_value));
            assert!(confidence.is_none());
        }
        other => panic!("expected test output, got {:?}", other),
    }
}

//! Gambler's-ruin risk for an equal-stake random walk.

/// Risk of eventually losing a bankroll of `bankroll_units` equal-size
/// bets when each bet wins one unit with probability `win_rate` and loses
/// one unit otherwise.
///
/// Classical symmetric-stake gambler's ruin against an infinitely rich
/// opponent: ruin is certain (1.0) for `win_rate <= 0.5`; otherwise
/// `((1 - p)/p)^units`. The formula does not generalize to unequal
/// win/loss unit sizes; that variant needs the asymmetric random-walk
/// treatment and is intentionally out of scope here.
pub fn risk_of_ruin(win_rate: f64, bankroll_units: u32) -> f64 {
    if win_rate <= 0.5 {
        return 1.0;
    }
    let loss_rate = 1.0 - win_rate;
    (loss_rate / win_rate).powi(bankroll_units as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fair_game_is_certain_ruin() {
        assert_eq!(risk_of_ruin(0.5, 100), 1.0);
        assert_eq!(risk_of_ruin(0.3, 10), 1.0);
        assert_eq!(risk_of_ruin(0.0, 1), 1.0);
    }

    #[test]
    fn test_positive_edge() {
        // (0.4/0.6)^10
        let r = risk_of_ruin(0.6, 10);
        assert_relative_eq!(r, (0.4f64 / 0.6).powi(10), epsilon = 1e-12);
    }

    #[test]
    fn test_deeper_bankroll_lowers_risk() {
        assert!(risk_of_ruin(0.55, 20) < risk_of_ruin(0.55, 10));
    }

    #[test]
    fn test_zero_bankroll_is_ruined() {
        // No units to bet: already ruined, regardless of edge.
        assert_eq!(risk_of_ruin(0.9, 0), 1.0);
    }
}

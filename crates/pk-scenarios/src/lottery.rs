//! Lottery jackpot odds.

use pk_prob::math::choose;

/// Probability of hitting the jackpot: matching all `balls_to_pick` from a
/// pool of `total_balls`, and the bonus draw as well when a bonus pool
/// exists (Powerball style: 5 of 69 plus 1 of 26).
///
/// `P = 1/C(total, pick) × 1/C(bonus, bonus_pick)`, with the bonus factor
/// 1 when `bonus_balls` is 0. Returns 0.0 when a draw is impossible
/// (pick larger than its pool).
pub fn jackpot_probability(
    total_balls: u64,
    balls_to_pick: u64,
    bonus_balls: u64,
    bonus_to_pick: u64,
) -> f64 {
    let Some(main_combinations) = choose(total_balls, balls_to_pick) else {
        return 0.0;
    };
    let mut probability = 1.0 / main_combinations;

    if bonus_balls > 0 && bonus_to_pick > 0 {
        let Some(bonus_combinations) = choose(bonus_balls, bonus_to_pick) else {
            return 0.0;
        };
        probability /= bonus_combinations;
    }
    probability
}

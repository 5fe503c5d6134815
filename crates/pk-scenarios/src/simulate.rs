//! Seeded Monte-Carlo simulations (dice, coins, card hands).
//!
//! Sampling is deterministic: the caller supplies the seed, so identical
//! inputs yield identical outputs and the engine's pure-function contract
//! holds across the simulation helpers too.

use pk_core::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Binomial, Distribution};

/// Sums of `num_dice` fair six-sided dice, rolled `num_rolls` times.
pub fn dice_roll_sums(num_dice: u32, num_rolls: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_rolls)
        .map(|_| (0..num_dice).map(|_| rng.gen_range(1..=6u32)).sum())
        .collect()
}

/// Head counts from flipping `num_coins` fair coins, `num_flips` times.
pub fn coin_flip_heads(num_coins: u64, num_flips: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let binom = Binomial::new(num_coins, 0.5).expect("Binomial::new(p=0.5)");
    (0..num_flips).map(|_| binom.sample(&mut rng)).collect()
}

/// Rank sums of `num_draws` hands of `hand_size` cards, sampled without
/// replacement from a 52-card deck with ranks 1..=13 (four of each).
pub fn card_hand_sums(num_draws: usize, hand_size: usize, seed: u64) -> Result<Vec<u32>> {
    if hand_size > 52 {
        return Err(Error::Domain(format!("hand size must be at most 52, got {}", hand_size)));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let deck: Vec<u32> = (0u32..52).map(|c| c % 13 + 1).collect();
    Ok((0..num_draws)
        .map(|_| deck.choose_multiple(&mut rng, hand_size).sum())
        .collect())
}

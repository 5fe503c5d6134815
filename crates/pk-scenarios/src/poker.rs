//! Poker out-hitting probabilities.

use pk_core::{Error, Result};

/// Probability of hitting one of `outs` cards with `draws` cards to come.
///
/// Post-flop model: 47 cards are unknown before the turn (52 minus 2 hole
/// cards and 3 board cards) and 46 before the river. That fixed unknown
/// count is a modeling choice for the Texas hold'em flop spot, not a
/// general deck calculation.
///
/// - `draws = 1` (river only): `outs / 46`
/// - `draws = 2` (turn and river): `1 - (47-outs)/47 × (46-outs)/46`
pub fn hit_probability(outs: u64, draws: u8) -> Result<f64> {
    if outs > 46 {
        return Err(Error::Domain(format!("outs must be at most 46, got {}", outs)));
    }
    let outs = outs as f64;
    match draws {
        1 => Ok(outs / 46.0),
        2 => {
            let miss_turn = (47.0 - outs) / 47.0;
            let miss_river = (46.0 - outs) / 46.0;
            Ok(1.0 - miss_turn * miss_river)
        }
        other => Err(Error::Domain(format!("cards to come must be 1 or 2, got {}", other))),
    }
}

//! # pk-scenarios
//!
//! Applied probability scenarios built on the core calculus: lottery odds,
//! the birthday paradox, poker outs, gambler's-ruin risk, and A/B test
//! significance, plus seeded Monte-Carlo simulation helpers.

#![warn(missing_docs)]

/// A/B test significance (delegates to the two-proportion Z-test).
pub mod abtest;
/// Birthday paradox.
pub mod birthday;
/// Lottery jackpot odds.
pub mod lottery;
/// Poker out-hitting probabilities.
pub mod poker;
/// Gambler's-ruin risk for an equal-stake random walk.
pub mod ruin;
/// Seeded Monte-Carlo simulations (dice, coins, card hands).
pub mod simulate;

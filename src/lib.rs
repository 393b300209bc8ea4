//! poker-odds: Texas Hold'em hand category odds
//!
//! Given two hole cards and the community cards revealed so far, report how
//! likely each final hand category (High Card through Royal Flush) is once
//! the board is complete.
//!
//! - Complete board: the made hand, at probability 1.
//! - Flop or turn: every completion of the board is enumerated (exact).
//! - Earlier: a uniform sample of distinct completions, add-one smoothed.
//!
//! ## Quick start
//! ```
//! use poker_odds::evaluator::HandCategory;
//! use poker_odds::hand::{Board, HoleCards};
//! use poker_odds::odds::estimate;
//!
//! let hole: HoleCards = "AS KS".parse().unwrap();
//! let board: Board = "QS JS TS".parse().unwrap();
//!
//! let dist = estimate(&hole, &board).unwrap();
//! assert_eq!(dist.len(), 1);
//! assert_eq!(dist.get(HandCategory::RoyalFlush), Some(1.0));
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-odds -- --hole "AS KS" --board "QS JS TS"
//! ```

pub mod cards;
pub mod cli;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod odds;

/// Library version, shown in the interactive banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

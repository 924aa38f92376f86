// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Texas Hold'em hand classifier.
//!
//! This crate finds the best 5 cards hand in a set of 5 to 7 cards,
//! classifies it into one of the nine standard categories, and produces a
//! [HandRank] that is totally ordered for winner determination, kickers
//! included.
//!
//! To classify a hand build a [CardSet] and call [best_hand]:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = "AS KS QS JS TS 7H 2D"
//!     .split_whitespace()
//!     .map(|c| c.parse().unwrap())
//!     .collect::<CardSet>();
//!
//! let hand = best_hand(&cards).unwrap();
//! assert_eq!(hand.category(), Category::StraightFlush);
//! assert_eq!(hand.to_string(), "Straight Flush: AS KS QS JS TS");
//! ```
//!
//! [possible_hands] explores every completion of a partial hand from a pool
//! of cards and keeps the best result per category; the **`parallel`**
//! feature adds [par_possible_hands] that splits the completions across a
//! given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod category;
mod classify;
mod combos;
mod hand_rank;

pub use category::Category;
pub use classify::best_hand;
#[cfg(feature = "parallel")]
pub use combos::par_possible_hands;
pub use combos::possible_hands;
pub use hand_rank::HandRank;

// Reexport cards types.
pub use showdown_cards::{Card, CardError, CardSet, Deck, Rank, SortKey, Suit};

/// Errors for hand classification and enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Too few cards to produce a 5 cards hand.
    #[error("need at least {need} cards, got {got}")]
    InsufficientCards {
        /// Number of cards available.
        got: usize,
        /// Number of cards required.
        need: usize,
    },
    /// An enumeration target smaller than the cards already held.
    #[error("target size {target} is smaller than the {have} cards already held")]
    TargetTooSmall {
        /// Number of cards already held.
        have: usize,
        /// Requested completion size.
        target: usize,
    },
}

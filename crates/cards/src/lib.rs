// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown playing cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [CardSet] collection with rank and suit views and key based sorting:
//!
//! ```
//! # use showdown_cards::{CardSet, Rank, SortKey};
//! let mut cards = CardSet::try_from_indices(&[0, 13, 26, 40, 5]).unwrap();
//! cards.sort_desc(SortKey::ByRank);
//! assert_eq!(cards.count_rank(Rank::Ace), 3);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck:
//!
//! ```
//! # use showdown_cards::Deck;
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let hand = deck.draw(7).unwrap();
//! assert_eq!(hand.len(), 7);
//! assert_eq!(deck.count(), 45);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod set;

pub use card::{Card, CardError, Rank, Suit};
pub use deck::Deck;
pub use set::{CardSet, SortKey};

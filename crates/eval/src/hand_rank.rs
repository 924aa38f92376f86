// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The comparable result of a hand classification.
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use showdown_cards::Card;

use crate::Category;

/// A classified hand: category and canonical best five cards.
///
/// The five cards are ordered descending by evaluation significance, the
/// card at index 0 compares first. Two hands compare by category ordinal,
/// then card by card on ranks only, suits never break ties: a spades flush
/// and the same heart ranks flush are equal hands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HandRank {
    category: Category,
    best_five: [Card; 5],
}

impl HandRank {
    pub(crate) fn new(category: Category, best_five: [Card; 5]) -> Self {
        Self {
            category,
            best_five,
        }
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The canonical five cards, descending by comparison significance.
    pub fn best_five(&self) -> &[Card; 5] {
        &self.best_five
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            let ranks = self.best_five.iter().map(|c| c.rank());
            let other_ranks = other.best_five.iter().map(|c| c.rank());
            ranks.cmp(other_ranks)
        })
    }
}

impl Hash for HandRank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.category.hash(state);
        for card in &self.best_five {
            card.rank().hash(state);
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category)?;
        for card in &self.best_five {
            write!(f, " {card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::{Rank, Suit};

    fn five(s: &str) -> [Card; 5] {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<_>>();
        cards.try_into().unwrap()
    }

    #[test]
    fn category_beats_ranks() {
        let pair = HandRank::new(Category::Pair, five("AS AH KD QC JS"));
        let high = HandRank::new(Category::HighCard, five("AS KH QD JC 9S"));
        let flush = HandRank::new(Category::Flush, five("9H 8H 6H 4H 2H"));

        assert!(pair > high);
        assert!(flush > pair);
        assert!(flush > high);
    }

    #[test]
    fn kickers_break_ties() {
        // Pair of kings, A 9 7 kickers beats A 9 6.
        let a = HandRank::new(Category::Pair, five("KS KH AD 9C 7S"));
        let b = HandRank::new(Category::Pair, five("KD KC AH 9S 6D"));
        assert!(a > b);
        assert!(b < a);
    }

    #[test]
    fn suits_never_break_ties() {
        let spades = HandRank::new(Category::Flush, five("AS JS 9S 7S 2S"));
        let hearts = HandRank::new(Category::Flush, five("AH JH 9H 7H 2H"));

        assert_eq!(spades, hearts);
        assert_eq!(spades.cmp(&hearts), Ordering::Equal);
    }

    #[test]
    fn strict_total_order() {
        let a = HandRank::new(Category::TwoPair, five("AS AH KD KC QS"));
        let b = HandRank::new(Category::TwoPair, five("AD AC KH KS JS"));
        let c = HandRank::new(Category::Pair, five("AS AH KD QC JS"));

        // Reflexive equality and trichotomy.
        assert_eq!(a, a);
        assert_eq!([a < b, a == b, a > b].iter().filter(|&&p| p).count(), 1);

        // Transitivity.
        assert!(a > b);
        assert!(b > c);
        assert!(a > c);

        // Sorting a table of hands picks the winner last.
        let mut table = vec![c, a, b];
        table.sort();
        assert_eq!(table, vec![c, b, a]);
    }

    #[test]
    fn display() {
        let hand = HandRank::new(
            Category::FullHouse,
            [
                Card::new(Rank::Seven, Suit::Clubs),
                Card::new(Rank::Seven, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Hearts),
                Card::new(Rank::Deuce, Suit::Spades),
                Card::new(Rank::Deuce, Suit::Clubs),
            ],
        );
        assert_eq!(hand.to_string(), "Full House: 7C 7D 7H 2S 2C");
    }
}

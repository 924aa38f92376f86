// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! An ordered collection of cards.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, CardError, Rank, Suit};

/// Sort key for [CardSet::sort] and [CardSet::sort_desc].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by rank, suits break ties.
    ByRank,
    /// Sort by suit, ranks break ties.
    BySuit,
    /// Sort the given suit first, then the rest in [SortKey::BySuit] order.
    SuitFirst(Suit),
}

/// An ordered, mutable collection of cards.
///
/// Duplicate ranks across suits are expected, a set usually holds a player's
/// hole cards together with the board.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from 0..=51 card indices.
    ///
    /// Fails with the first out of domain index.
    pub fn try_from_indices(indices: &[u8]) -> Result<Self, CardError> {
        indices.iter().map(|&i| Card::from_index(i)).collect()
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates the cards in their current order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Checks if the set contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Appends a card to the set.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// The ranks of the cards in their current order.
    pub fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank()).collect()
    }

    /// The suits of the cards in their current order.
    pub fn suits(&self) -> Vec<Suit> {
        self.cards.iter().map(|c| c.suit()).collect()
    }

    /// Number of cards with the given rank.
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank() == rank).count()
    }

    /// Number of cards with the given suit.
    pub fn count_suit(&self, suit: Suit) -> usize {
        self.cards.iter().filter(|c| c.suit() == suit).count()
    }

    /// Sorts the cards ascending by the given key.
    pub fn sort(&mut self, key: SortKey) {
        self.sort_with(key, false);
    }

    /// Sorts the cards descending by the given key.
    ///
    /// With [SortKey::SuitFirst] the selected suit stays first, only the
    /// ordering within the groups is reversed.
    pub fn sort_desc(&mut self, key: SortKey) {
        self.sort_with(key, true);
    }

    fn sort_with(&mut self, key: SortKey, descending: bool) {
        self.cards.sort_by(|a, b| {
            if let SortKey::SuitFirst(suit) = key {
                let group = (a.suit() != suit).cmp(&(b.suit() != suit));
                if group != Ordering::Equal {
                    return group;
                }
            }

            let ord = match key {
                SortKey::ByRank => (a.rank(), a.suit()).cmp(&(b.rank(), b.suit())),
                SortKey::BySuit | SortKey::SuitFirst(_) => {
                    (a.suit(), a.rank()).cmp(&(b.suit(), b.rank()))
                }
            };

            if descending { ord.reverse() } else { ord }
        });
    }

    /// Removes one occurrence of the given card.
    ///
    /// Returns whether the card was present.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(pos) => {
                self.cards.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Removes one occurrence of each card in the given set.
    pub fn remove_all(&mut self, other: &CardSet) {
        for &card in other.cards() {
            self.remove_card(card);
        }
    }
}

impl From<Vec<Card>> for CardSet {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, card) in self.cards.iter().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> CardSet {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn views_and_counts() {
        let set = cards("AS AH 7D 7C 2H");
        assert_eq!(set.len(), 5);
        assert_eq!(
            set.ranks(),
            vec![Rank::Ace, Rank::Ace, Rank::Seven, Rank::Seven, Rank::Deuce]
        );
        assert_eq!(set.count_rank(Rank::Ace), 2);
        assert_eq!(set.count_rank(Rank::King), 0);
        assert_eq!(set.count_suit(Suit::Hearts), 2);
        assert_eq!(set.suits()[0], Suit::Spades);
        assert!(set.contains("7D".parse().unwrap()));
        assert!(!set.contains("7H".parse().unwrap()));
    }

    #[test]
    fn sort_by_rank() {
        let mut set = cards("7D AS 2H AH 7C");

        set.sort(SortKey::ByRank);
        assert_eq!(set.to_string(), "2H 7D 7C AH AS");

        set.sort_desc(SortKey::ByRank);
        assert_eq!(set.to_string(), "AS AH 7C 7D 2H");
    }

    #[test]
    fn sort_by_suit() {
        let mut set = cards("7D AS 2H AH 7C");

        set.sort(SortKey::BySuit);
        assert_eq!(set.to_string(), "7D 7C 2H AH AS");

        // The selected suit stays first when sorting descending.
        set.sort_desc(SortKey::SuitFirst(Suit::Hearts));
        assert_eq!(set.to_string(), "AH 2H AS 7C 7D");
    }

    #[test]
    fn remove_operations() {
        let mut set = cards("AS AH 7D 7C 2H");

        assert!(set.remove_card("7D".parse().unwrap()));
        assert!(!set.remove_card("7D".parse().unwrap()));
        assert_eq!(set.len(), 4);

        set.remove_all(&cards("AS 2H KD"));
        assert_eq!(set.to_string(), "AH 7C");
    }

    #[test]
    fn from_indices() {
        let set = CardSet::try_from_indices(&[0, 13, 26, 39]).unwrap();
        assert_eq!(set.to_string(), "AD AC AH AS");

        assert_eq!(
            CardSet::try_from_indices(&[0, 52]),
            Err(CardError::InvalidIndex(52))
        );
        assert!(CardSet::try_from_indices(&[]).unwrap().is_empty());
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A standard 52-cards deck.
use rand::prelude::*;

use crate::{Card, CardError, CardSet, Rank, Suit};

/// A cards deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, `None` when the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draws `n` cards from the deck.
    ///
    /// Fails without dealing any card when fewer than `n` remain, a short
    /// draw is never silently truncated.
    pub fn draw(&mut self, n: usize) -> Result<CardSet, CardError> {
        if n > self.cards.len() {
            return Err(CardError::NotEnoughCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.split_off(self.cards.len() - n).into())
    }

    /// Draws `cards_each` cards for each of `players` players.
    pub fn distribute(
        &mut self,
        players: usize,
        cards_each: usize,
    ) -> Result<Vec<CardSet>, CardError> {
        let requested = players * cards_each;
        if requested > self.cards.len() {
            return Err(CardError::NotEnoughCards {
                requested,
                remaining: self.cards.len(),
            });
        }

        (0..players).map(|_| self.draw(cards_each)).collect()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Removes all the cards in the given set from the deck.
    pub fn remove_all(&mut self, cards: &CardSet) {
        self.cards.retain(|c| !cards.contains(*c));
    }

    /// Calls the `f` closure for each k-cards combination in the deck.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let n = self.cards.len();
        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); k];
        let mut pos = vec![0usize; k];

        // Odometer over strictly increasing index tuples.
        for (idx, p) in pos.iter_mut().enumerate() {
            *p = idx;
        }

        loop {
            for (idx, &p) in pos.iter().enumerate() {
                h[idx] = self.cards[p];
            }

            f(&h);

            let mut level = k;
            loop {
                if level == 0 {
                    return;
                }

                level -= 1;
                pos[level] += 1;
                if pos[level] <= n - (k - level) {
                    break;
                }
            }

            for level in (level + 1)..k {
                pos[level] = pos[level - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

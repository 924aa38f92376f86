// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card, rank, and suit definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use thiserror::Error;

/// Errors for card construction and deck operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card index outside the 0..=51 domain.
    #[error("invalid card index {0}, must be 0..=51")]
    InvalidIndex(u8),
    /// A rank value outside the 2..=14 domain.
    #[error("invalid rank value {0}, must be 2..=14")]
    InvalidRank(u8),
    /// A suit value outside the 0..=3 domain.
    #[error("invalid suit value {0}, must be 0..=3")]
    InvalidSuit(u8),
    /// A string that doesn't parse as a card.
    #[error("cannot parse card from {0:?}")]
    ParseCard(String),
    /// A draw that asked for more cards than remain.
    #[error("requested {requested} cards but only {remaining} remain")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the source.
        remaining: usize,
    },
}

/// Card rank.
///
/// Each rank carries its poker value, the Ace is always high on the card
/// itself, the wheel straight is handled by the hand classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace = 14,
}

impl Rank {
    /// Returns all ranks from Deuce to Ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank poker value in 2..=14.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.value() == value)
            .ok_or(CardError::InvalidRank(value))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
///
/// The derived order puts Spades highest, used only to pick a deterministic
/// representative among cards of equal rank, never to rank hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Clubs suit.
    Clubs,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Suit::Diamonds),
            1 => Ok(Suit::Clubs),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Spades),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A playing card.
///
/// Cards are equal when both rank and suit match; the derived order compares
/// rank first with suit as a tiebreak to make it total, ranking semantics
/// compare ranks only.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Creates a card from a combined 0..=51 index.
    ///
    /// The suit is `index / 13`; within a suit, index 0 is the Ace followed
    /// by Deuce up to King.
    pub fn from_index(index: u8) -> Result<Card, CardError> {
        if index > 51 {
            return Err(CardError::InvalidIndex(index));
        }

        let suit = Suit::try_from(index / 13)?;
        let rank = match index % 13 {
            0 => Rank::Ace,
            n => Rank::try_from(n + 1)?,
        };

        Ok(Card { rank, suit })
    }

    /// The combined 0..=51 index, inverse of [Card::from_index].
    pub fn index(&self) -> u8 {
        let offset = match self.rank {
            Rank::Ace => 0,
            rank => rank.value() - 1,
        };

        self.suit as u8 * 13 + offset
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CardError::ParseCard(s.to_string());

        let mut chars = s.chars();
        let (rank_ch, suit_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => (r.to_ascii_uppercase(), s.to_ascii_uppercase()),
            _ => return Err(parse_err()),
        };

        let rank = match rank_ch {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(parse_err()),
        };

        let suit = match suit_ch {
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(parse_err()),
        };

        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn index_bijection() {
        let mut seen = HashSet::default();
        for index in 0..52 {
            let card = Card::from_index(index).unwrap();
            assert_eq!(card.index(), index);
            seen.insert(card);
        }
        assert_eq!(seen.len(), 52);

        // Index 0 of each suit is the Ace.
        for (index, suit) in [(0, Suit::Diamonds), (13, Suit::Clubs), (26, Suit::Hearts)] {
            let card = Card::from_index(index).unwrap();
            assert_eq!(card.rank(), Rank::Ace);
            assert_eq!(card.suit(), suit);
        }

        assert_eq!(Card::from_index(52), Err(CardError::InvalidIndex(52)));
        assert_eq!(Card::from_index(255), Err(CardError::InvalidIndex(255)));
    }

    #[test]
    fn rank_and_suit_domains() {
        assert_eq!(Rank::try_from(2), Ok(Rank::Deuce));
        assert_eq!(Rank::try_from(14), Ok(Rank::Ace));
        assert_eq!(Rank::try_from(1), Err(CardError::InvalidRank(1)));
        assert_eq!(Rank::try_from(15), Err(CardError::InvalidRank(15)));

        assert_eq!(Suit::try_from(0), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from(3), Ok(Suit::Spades));
        assert_eq!(Suit::try_from(4), Err(CardError::InvalidSuit(4)));

        // The rank order follows the poker values, no rank 1 exists.
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Deuce < Rank::Trey);
        assert_eq!(Rank::ranks().count(), 13);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "AC");
    }

    #[test]
    fn card_from_string() {
        for index in 0..52 {
            let card = Card::from_index(index).unwrap();
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        // Case insensitive.
        assert_eq!("as".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("tD".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));

        for bad in ["", "A", "ASX", "1S", "AX", "XX"] {
            assert_eq!(bad.parse::<Card>(), Err(CardError::ParseCard(bad.into())));
        }
    }

    #[test]
    fn card_ordering() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ks = Card::new(Rank::King, Suit::Spades);
        let ah = Card::new(Rank::Ace, Suit::Hearts);

        assert!(ah > ks);
        assert!(ks > kd);
        assert_ne!(kd, ks);
        assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
    }
}

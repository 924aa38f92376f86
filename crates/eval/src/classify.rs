// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Category detection and canonical hand extraction.
//!
//! Each category has a finder returning the canonical five cards when the
//! category is present, `None` otherwise. [best_hand] chains the finders in
//! strength order so a set that satisfies several categories reports only
//! the strongest one.
use std::cmp::Ordering;

use showdown_cards::{Card, CardSet, Rank};

use crate::{Category, EvalError, HandRank};

/// Finds the best five cards hand in a set of five or more cards.
///
/// The input set is not modified, the classifier sorts an internal copy.
///
/// # Errors
///
/// Fails with [EvalError::InsufficientCards] for sets of fewer than five
/// cards.
pub fn best_hand(cards: &CardSet) -> Result<HandRank, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards {
            got: cards.len(),
            need: 5,
        });
    }

    Ok(eval(cards.cards()))
}

/// Classifies a slice of at least five cards.
pub(crate) fn eval(cards: &[Card]) -> HandRank {
    debug_assert!(cards.len() >= 5);

    // Descending by rank, spades first among equal ranks, so the first
    // qualifying card is always the deterministic representative.
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    find_straight_flush(&sorted)
        .map(|five| HandRank::new(Category::StraightFlush, five))
        .or_else(|| find_four_of_a_kind(&sorted).map(|f| HandRank::new(Category::FourOfAKind, f)))
        .or_else(|| find_full_house(&sorted).map(|f| HandRank::new(Category::FullHouse, f)))
        .or_else(|| find_flush(&sorted).map(|f| HandRank::new(Category::Flush, f)))
        .or_else(|| find_straight(&sorted).map(|f| HandRank::new(Category::Straight, f)))
        .or_else(|| find_three_of_a_kind(&sorted).map(|f| HandRank::new(Category::ThreeOfAKind, f)))
        .or_else(|| find_two_pair(&sorted).map(|f| HandRank::new(Category::TwoPair, f)))
        .or_else(|| find_pair(&sorted).map(|f| HandRank::new(Category::Pair, f)))
        .unwrap_or_else(|| HandRank::new(Category::HighCard, high_cards(&sorted)))
}

/// Groups cards by rank keeping ranks with at least `min_count` cards,
/// highest rank first.
///
/// This is the shared primitive for quads, full house, trips, two pair,
/// and pair extraction. Input must be sorted descending by rank.
fn rank_groups(cards: &[Card], min_count: usize) -> Vec<(Rank, Vec<Card>)> {
    let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
    for &card in cards {
        match groups.last_mut() {
            Some((rank, group)) if *rank == card.rank() => group.push(card),
            _ => groups.push((card.rank(), vec![card])),
        }
    }

    groups.retain(|(_, group)| group.len() >= min_count);
    groups
}

/// One representative card per rank, descending.
///
/// With duplicate ranks across suits the input order decides the pick, for
/// cards sorted descending that is the highest suit.
fn distinct_by_rank(cards: &[Card]) -> Vec<Card> {
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len());
    for &card in cards {
        if distinct.last().map(|c| c.rank()) != Some(card.rank()) {
            distinct.push(card);
        }
    }
    distinct
}

/// Finds the highest straight, the wheel included.
///
/// The wheel's canonical five leads with the Five and ends with the Ace, a
/// wheel never outranks any other straight.
fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let distinct = distinct_by_rank(cards);

    for w in distinct.windows(5) {
        if w[0].rank().value() - w[4].rank().value() == 4 {
            return Some([w[0], w[1], w[2], w[3], w[4]]);
        }
    }

    // The wheel: with distinct ranks descending, 5 4 3 2 can only be the
    // last four entries.
    let n = distinct.len();
    if n >= 5 && distinct[0].rank() == Rank::Ace {
        let low = &distinct[n - 4..];
        if low.iter().map(|c| c.rank().value()).eq([5, 4, 3, 2]) {
            return Some([low[0], low[1], low[2], low[3], distinct[0]]);
        }
    }

    None
}

/// Cards of each suit holding at least five cards, each group descending.
///
/// In a single 52-cards deck at most one suit can qualify for a hand of up
/// to seven cards, the multi group shape keeps the suit tie-break defined.
fn flush_suits(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut suits: Vec<Vec<Card>> = vec![Vec::new(); 4];
    for &card in cards {
        suits[card.suit() as usize].push(card);
    }

    suits.retain(|suited| suited.len() >= 5);
    suits
}

/// Finds the best flush, the top five of the qualifying suit.
///
/// If several suits qualify the five cards sequences are compared card by
/// card, the same rule used to order hands.
fn find_flush(cards: &[Card]) -> Option<[Card; 5]> {
    flush_suits(cards)
        .iter()
        .map(|suited| [suited[0], suited[1], suited[2], suited[3], suited[4]])
        .max_by(cmp_five)
}

/// Finds the highest straight within a flush qualifying suit.
fn find_straight_flush(cards: &[Card]) -> Option<[Card; 5]> {
    flush_suits(cards)
        .iter()
        .filter_map(|suited| find_straight(suited))
        .max_by(cmp_five)
}

fn find_four_of_a_kind(cards: &[Card]) -> Option<[Card; 5]> {
    let groups = rank_groups(cards, 4);
    let (_, quad) = groups.first()?;
    fill_to_five(quad.clone(), cards)
}

/// Finds the best full house.
///
/// The trip is the highest rank with three or more cards, the pair the
/// highest remaining rank with two or more; both groups are taken from the
/// rank grouping before any card is committed, a rank never serves as trip
/// and pair at once.
fn find_full_house(cards: &[Card]) -> Option<[Card; 5]> {
    let groups = rank_groups(cards, 2);
    let (trip_rank, trip) = groups.iter().find(|(_, group)| group.len() >= 3)?;
    let (_, pair) = groups.iter().find(|(rank, _)| rank != trip_rank)?;

    Some([trip[0], trip[1], trip[2], pair[0], pair[1]])
}

fn find_three_of_a_kind(cards: &[Card]) -> Option<[Card; 5]> {
    let groups = rank_groups(cards, 3);
    let (_, trip) = groups.first()?;
    fill_to_five(trip[..3].to_vec(), cards)
}

fn find_two_pair(cards: &[Card]) -> Option<[Card; 5]> {
    let groups = rank_groups(cards, 2);
    let [(_, first), (_, second), ..] = groups.as_slice() else {
        return None;
    };

    let mut combo = first[..2].to_vec();
    combo.extend_from_slice(&second[..2]);
    fill_to_five(combo, cards)
}

fn find_pair(cards: &[Card]) -> Option<[Card; 5]> {
    let groups = rank_groups(cards, 2);
    let (_, pair) = groups.first()?;
    fill_to_five(pair[..2].to_vec(), cards)
}

fn high_cards(cards: &[Card]) -> [Card; 5] {
    [cards[0], cards[1], cards[2], cards[3], cards[4]]
}

/// Fills a partial combo to five cards with the highest available kickers.
///
/// Iterates the cards descending and appends any card whose rank is not yet
/// in the combo, so a duplicate rank kicker can never slip in through
/// another suit. Returns `None` when the cards cannot fill five distinct
/// rank slots, the priority order in [eval] makes that unreachable.
fn fill_to_five(mut combo: Vec<Card>, cards: &[Card]) -> Option<[Card; 5]> {
    for &card in cards {
        if combo.len() == 5 {
            break;
        }
        if combo.iter().all(|c| c.rank() != card.rank()) {
            combo.push(card);
        }
    }

    combo.try_into().ok()
}

/// Card by card rank comparison of two canonical five cards sequences.
fn cmp_five(a: &[Card; 5], b: &[Card; 5]) -> Ordering {
    a.iter().map(|c| c.rank()).cmp(b.iter().map(|c| c.rank()))
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// Total hands      2598960
//
// High Card:       1302540
// Pair:            1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        10200
// Flush:           5108
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  40
// ```
//
// The counts match the known 5 cards hand frequencies, a mismatch in any
// category points at a classification bug.

use std::time::Instant;

use showdown_eval::{CardSet, Category, Deck, best_hand};

fn main() {
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(5, |hand| {
        let cards = hand.iter().copied().collect::<CardSet>();
        let rank = best_hand(&cards).expect("five cards");
        counts[rank.category() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in Category::all() {
        println!("{category}: {}", counts[category as usize]);
    }
}

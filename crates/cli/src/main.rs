// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;

use showdown_eval::{Card, CardSet, Deck, best_hand, possible_hands};

/// Classifies poker hands.
///
/// Pass 5 to 7 cards to classify the best five cards hand, for example
/// `showdown AS KS QS JS TS 7H 2D`, or use `--hole` to list the best
/// reachable hand per category from partial hole cards.
#[derive(Debug, Parser)]
struct Cli {
    /// The cards to evaluate (5 to 7, e.g. AS KS QS JS TS).
    #[clap(required_unless_present = "hole")]
    cards: Vec<String>,
    /// Hole cards to enumerate completions for (e.g. --hole AS KS).
    #[clap(long, num_args = 1..=6, conflicts_with = "cards")]
    hole: Vec<String>,
    /// Hand size to complete the hole cards to.
    #[clap(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(5..=7))]
    target: u8,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if cli.hole.is_empty() {
        classify(&cli.cards)
    } else {
        enumerate(&cli.hole, cli.target as usize)
    }
}

fn classify(args: &[String]) -> Result<()> {
    let cards = parse_cards(args)?;
    if !(5..=7).contains(&cards.len()) {
        bail!("expected 5 to 7 cards, got {}", cards.len());
    }

    let hand = best_hand(&cards)?;
    println!("{hand}");

    Ok(())
}

fn enumerate(args: &[String], target: usize) -> Result<()> {
    let hole = parse_cards(args)?;

    let mut deck = Deck::default();
    deck.remove_all(&hole);
    let pool = deck.into_iter().collect::<CardSet>();

    info!(
        "completing {} cards to {target} from a {} cards pool",
        hole.len(),
        pool.len()
    );

    let best = possible_hands(&hole, &pool, target)?;
    let mut hands = best.into_values().collect::<Vec<_>>();
    hands.sort();

    for hand in hands.iter().rev() {
        println!("{hand}");
    }

    Ok(())
}

fn parse_cards(args: &[String]) -> Result<CardSet> {
    let cards = args
        .iter()
        .map(|s| {
            s.parse::<Card>()
                .with_context(|| format!("invalid card {s:?}"))
        })
        .collect::<Result<CardSet>>()?;

    // A single deck cannot hold the same card twice.
    for (pos, &card) in cards.cards().iter().enumerate() {
        if cards.cards()[..pos].contains(&card) {
            bail!("duplicate card {card}");
        }
    }

    Ok(cards)
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown CLI.
//!
//! Ranks hands given on the command line, or deals random ones, and
//! announces the winner.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use rand::prelude::*;

use showdown_eval::{Card, Deck, HAND_SIZE, Hand, PatternRanker};

#[derive(Debug, Parser)]
struct Cli {
    /// Hands to rank, each five cards like "AS KS QS JS TS".
    hands: Vec<String>,
    /// Number of hands to deal when none are given.
    #[clap(long, short, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Deck shuffle seed for reproducible deals.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let ranker = PatternRanker;

    let hands = if cli.hands.is_empty() {
        deal_hands(cli.players as usize, cli.seed, &ranker)
    } else {
        parse_hands(&cli.hands, &ranker)?
    };

    for hand in &hands {
        println!("{hand}");
    }

    let Some(best) = hands.iter().max() else {
        bail!("no hands to rank");
    };

    let winners = hands.iter().filter(|h| *h == best).count();
    if winners > 1 {
        println!("\nSplit between {winners} hands with {}", best.describe());
    } else {
        println!("\nWinner: {best}");
    }

    Ok(())
}

/// Parses each hand as whitespace separated cards.
///
/// A hand with the wrong number of cards is not an error, the classifier
/// ranks it as not rankable and it loses the showdown.
fn parse_hands(specs: &[String], ranker: &PatternRanker) -> Result<Vec<Hand>> {
    let mut hands = Vec::with_capacity(specs.len());

    for spec in specs {
        let cards = spec
            .split_whitespace()
            .map(|c| c.parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        hands.push(Hand::new(cards, ranker));
    }

    Ok(hands)
}

fn deal_hands(players: usize, seed: Option<u64>, ranker: &PatternRanker) -> Vec<Hand> {
    let mut deck = match seed {
        Some(seed) => Deck::new_and_shuffled(&mut StdRng::seed_from_u64(seed)),
        None => Deck::new_and_shuffled(&mut rand::rng()),
    };

    (0..players)
        .map(|_| {
            let cards = (0..HAND_SIZE).map(|_| deck.deal()).collect();
            Hand::new(cards, ranker)
        })
        .collect()
}

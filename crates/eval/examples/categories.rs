// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example categories
// ...
// Total hands      2598960
// Elapsed:         0.321s
//
// High Card:       1303560
// One Pair:        1098240
// Two Pair:        123552
// Three of a Kind: 54912
// Straight:        9180
// Flush:           5112
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  32
// Royal Flush:     4
// ```

use std::time::Instant;

use showdown_eval::*;

fn bucket(rank: &HandRank) -> usize {
    match rank {
        HandRank::NotRankable => 0,
        HandRank::HighCard(_) => 1,
        HandRank::OnePair { .. } => 2,
        HandRank::TwoPair { .. } => 3,
        HandRank::ThreeOfAKind(_) => 4,
        HandRank::Straight(_) => 5,
        HandRank::Flush(_) => 6,
        HandRank::FullHouse { .. } => 7,
        HandRank::FourOfAKind(_) => 8,
        HandRank::StraightFlush(_) => 9,
        HandRank::RoyalFlush(_) => 10,
    }
}

#[rustfmt::skip]
fn main() {
    // Classify all C(52, 5) hands.
    let now = Instant::now();
    let mut counts = [0usize; 11];

    Deck::default().for_each_hand(|hand| {
        let rank = PatternRanker.rank_hand(hand);
        counts[bucket(&rank)] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();

    println!("Total hands      {total}");
    println!("Elapsed:         {elapsed:.3}s");
    println!();
    println!("High Card:       {}", counts[1]);
    println!("One Pair:        {}", counts[2]);
    println!("Two Pair:        {}", counts[3]);
    println!("Three of a Kind: {}", counts[4]);
    println!("Straight:        {}", counts[5]);
    println!("Flush:           {}", counts[6]);
    println!("Full House:      {}", counts[7]);
    println!("Four of a Kind:  {}", counts[8]);
    println!("Straight Flush:  {}", counts[9]);
    println!("Royal Flush:     {}", counts[10]);
}

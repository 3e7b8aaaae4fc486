// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A hand of cards with its classification.
use std::{cmp::Ordering, fmt};

use showdown_cards::Card;

use crate::{rank::HandRank, ranker::HandRanker};

/// A hand of cards classified once at construction.
///
/// The classifier is injected so callers and tests pick the implementation,
/// comparisons and the description delegate to the computed [HandRank].
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    rank: HandRank,
}

impl Hand {
    /// Creates a hand classifying the cards with the given ranker.
    pub fn new(cards: Vec<Card>, ranker: &dyn HandRanker) -> Self {
        let rank = ranker.rank_hand(&cards);
        Self { cards, rank }
    }

    /// The cards in this hand.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand classification.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// Describes the hand classification.
    pub fn describe(&self) -> String {
        self.rank.to_string()
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hands compare by classification, not by their cards.
impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "- {}", self.rank)
    }
}

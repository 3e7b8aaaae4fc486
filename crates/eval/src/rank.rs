// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classifications and their ordering.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::{Rank, Suit};

/// The classification of a five cards hand.
///
/// Each variant carries the ranks needed to break a tie against another hand
/// of the same category, with the most significant rank first. Rank sequences
/// are stored in descending order so that comparing them lexicographically
/// compares the hands.
///
/// Two classifications of different categories order by category alone,
/// [HandRank::NotRankable] loses to every other category, and royal flushes
/// all tie regardless of suit:
///
/// ```
/// # use showdown_eval::HandRank;
/// # use showdown_cards::{Rank, Suit};
/// let royal = HandRank::RoyalFlush(Suit::Spades);
/// assert_eq!(royal, HandRank::RoyalFlush(Suit::Hearts));
/// assert!(royal > HandRank::StraightFlush(Rank::King));
/// assert!(HandRank::NotRankable < HandRank::HighCard([Rank::Seven; 5]));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum HandRank {
    /// Not a five cards hand, or the classifier could not rank it.
    NotRankable,
    /// No pattern, all five ranks in descending order.
    HighCard([Rank; 5]),
    /// Two cards of one rank, the other three in descending order.
    OnePair {
        /// The paired rank.
        pair: Rank,
        /// The unpaired ranks, highest first.
        kickers: [Rank; 3],
    },
    /// Two cards each of two ranks.
    TwoPair {
        /// The higher paired rank.
        high: Rank,
        /// The lower paired rank.
        low: Rank,
        /// The remaining unpaired rank.
        kicker: Rank,
    },
    /// Three cards of one rank.
    ThreeOfAKind(Rank),
    /// Five contiguous ranks, the top rank of the run.
    Straight(Rank),
    /// Five cards of one suit, all five ranks in descending order.
    Flush([Rank; 5]),
    /// Three cards of one rank and two of another.
    FullHouse {
        /// The rank with three cards.
        trips: Rank,
        /// The rank with two cards.
        pair: Rank,
    },
    /// Four cards of one rank.
    FourOfAKind(Rank),
    /// A flush with five contiguous ranks, the top rank of the run.
    StraightFlush(Rank),
    /// Ten to ace of one suit, kept only for the description.
    RoyalFlush(Suit),
}

impl HandRank {
    /// Category ordinal, higher always wins across categories.
    pub(crate) fn strength(&self) -> u8 {
        match self {
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
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        use HandRank::*;
        match (self, other) {
            (HighCard(a), HighCard(b)) => a.cmp(b),
            (
                OnePair { pair: a, kickers: ka },
                OnePair { pair: b, kickers: kb },
            ) => a.cmp(b).then_with(|| ka.cmp(kb)),
            (
                TwoPair { high: ha, low: la, kicker: ka },
                TwoPair { high: hb, low: lb, kicker: kb },
            ) => ha.cmp(hb).then_with(|| la.cmp(lb)).then_with(|| ka.cmp(kb)),
            (ThreeOfAKind(a), ThreeOfAKind(b)) => a.cmp(b),
            (Straight(a), Straight(b)) => a.cmp(b),
            (Flush(a), Flush(b)) => a.cmp(b),
            (
                FullHouse { trips: ta, pair: pa },
                FullHouse { trips: tb, pair: pb },
            ) => ta.cmp(tb).then_with(|| pa.cmp(pb)),
            (FourOfAKind(a), FourOfAKind(b)) => a.cmp(b),
            (StraightFlush(a), StraightFlush(b)) => a.cmp(b),
            // Royal flushes tie whatever the suit, the sentinel ties with
            // itself, and different categories order by strength.
            _ => self.strength().cmp(&other.strength()),
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Equality follows the ordering, royal flushes of different suits are equal.
impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRank::NotRankable => write!(f, "Not a rankable hand"),
            HandRank::HighCard(ranks) => write!(f, "High Card, {} high", ranks[0].name()),
            HandRank::OnePair { pair, .. } => write!(f, "One Pair of {}", pair.plural()),
            HandRank::TwoPair { high, low, .. } => {
                write!(f, "Two Pair, {} and {}", high.plural(), low.plural())
            }
            HandRank::ThreeOfAKind(rank) => write!(f, "Three of a Kind, {}", rank.plural()),
            HandRank::Straight(rank) => write!(f, "Straight, {} high", rank.name()),
            HandRank::Flush(ranks) => write!(f, "Flush, {} high", ranks[0].name()),
            HandRank::FullHouse { trips, pair } => {
                write!(f, "Full House, {} over {}", trips.plural(), pair.plural())
            }
            HandRank::FourOfAKind(rank) => write!(f, "Four of a Kind, {}", rank.plural()),
            HandRank::StraightFlush(rank) => write!(f, "Straight Flush, {} high", rank.name()),
            HandRank::RoyalFlush(suit) => write!(f, "Royal Flush of {}", suit.name()),
        }
    }
}

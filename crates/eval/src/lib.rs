// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand classifier.
//!
//! This crate classifies a five cards hand into one of the standard Poker
//! categories and totally orders the results, so two classified hands tell
//! which one wins.
//!
//! The classifier is a [HandRanker] strategy injected into [Hand], the
//! default [PatternRanker] tests hand patterns in descending category order
//! on a private sorted copy of the cards:
//!
//! ```
//! # use showdown_eval::*;
//! let cards = |s: &str| -> Vec<Card> {
//!     s.split_whitespace().map(|c| c.parse().unwrap()).collect()
//! };
//!
//! let quads = Hand::new(cards("9D 9C 9H 9S 2C"), &PatternRanker);
//! let full = Hand::new(cards("KD KC KH 4D 4C"), &PatternRanker);
//!
//! assert!(quads > full);
//! assert_eq!(quads.describe(), "Four of a Kind, Nines");
//! assert_eq!(full.describe(), "Full House, Kings over Fours");
//! ```
//!
//! Classification never fails: malformed input yields the
//! [HandRank::NotRankable] sentinel which loses to every rankable hand.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub mod rank;
pub mod ranker;

pub use hand::Hand;
pub use rank::HandRank;
pub use ranker::{HAND_SIZE, HandRanker, PatternRanker};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, ParseCardError, Rank, Suit};

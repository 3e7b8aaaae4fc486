// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification.
use log::warn;

use showdown_cards::{Card, Rank, Suit};

use crate::rank::HandRank;

/// The number of cards in a rankable hand.
pub const HAND_SIZE: usize = 5;

/// A hand classification strategy.
///
/// The ranker is injected into [Hand](crate::hand::Hand) rather than looked
/// up from a process wide default, so alternate implementations can be
/// substituted in tests.
pub trait HandRanker {
    /// Classifies the given cards into a [HandRank].
    ///
    /// Classification never fails: any input that cannot be ranked, starting
    /// with one that is not exactly five cards, yields
    /// [HandRank::NotRankable].
    fn rank_hand(&self, cards: &[Card]) -> HandRank;
}

/// Classifier that tests hand patterns in descending category order.
///
/// The ranker is stateless, a single instance can be shared freely across
/// threads and classifying the same cards always yields equal ranks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternRanker;

impl HandRanker for PatternRanker {
    fn rank_hand(&self, cards: &[Card]) -> HandRank {
        let Some(hand) = SortedHand::new(cards) else {
            return HandRank::NotRankable;
        };

        for (matches, extract) in CATEGORIES {
            if matches(&hand) {
                return extract(&hand).unwrap_or_else(|| {
                    // A matched category must extract its tie-break ranks,
                    // degrade to the sentinel instead of failing the caller.
                    debug_assert!(false, "no tie-break ranks for {hand:?}");
                    warn!("no tie-break ranks for {hand:?}");
                    HandRank::NotRankable
                });
            }
        }

        HandRank::NotRankable
    }
}

type Predicate = fn(&SortedHand) -> bool;
type Extractor = fn(&SortedHand) -> Option<HandRank>;

/// Category tests in descending strength order.
///
/// The order is part of the classification contract: a stronger pattern also
/// satisfies weaker predicates, four of a kind contains a pair, so the first
/// match must win.
const CATEGORIES: [(Predicate, Extractor); 10] = [
    (is_royal_flush, royal_flush),
    (is_straight_flush, straight_flush),
    (has_four_of_a_kind, four_of_a_kind),
    (has_full_house, full_house),
    (is_flush, flush),
    (is_straight, straight),
    (has_three_of_a_kind, three_of_a_kind),
    (has_two_pair, two_pair),
    (has_one_pair, one_pair),
    (any_cards, high_card),
];

/// A private copy of the hand sorted by descending rank.
///
/// The classifier sorts this copy instead of the caller's cards, which are
/// never reordered.
#[derive(Debug)]
struct SortedHand {
    cards: [Card; HAND_SIZE],
}

impl SortedHand {
    fn new(cards: &[Card]) -> Option<Self> {
        let mut copy: [Card; HAND_SIZE] = cards.try_into().ok()?;
        copy.sort_unstable_by(|a, b| b.cmp(a));
        Some(Self { cards: copy })
    }

    /// The highest rank in the hand.
    fn top(&self) -> Rank {
        self.cards[0].rank()
    }

    fn suit(&self) -> Suit {
        self.cards[0].suit()
    }

    /// All five ranks in descending order.
    fn ranks(&self) -> [Rank; HAND_SIZE] {
        self.cards.map(|c| c.rank())
    }

    /// All ranks shared by exactly `count` cards, in descending order.
    fn ranks_with_count(&self, count: usize) -> Vec<Rank> {
        let mut found = Vec::new();
        let mut i = 0;

        // The cards are sorted so equal ranks form runs.
        while i < self.cards.len() {
            let rank = self.cards[i].rank();
            let run = self.cards[i..]
                .iter()
                .take_while(|c| c.rank() == rank)
                .count();

            if run == count {
                found.push(rank);
            }

            i += run;
        }

        found
    }

    /// The highest rank shared by exactly `count` cards.
    fn rank_with_count(&self, count: usize) -> Option<Rank> {
        self.ranks_with_count(count).first().copied()
    }
}

fn is_royal_flush(hand: &SortedHand) -> bool {
    is_straight_flush(hand) && hand.top() == Rank::Ace
}

fn royal_flush(hand: &SortedHand) -> Option<HandRank> {
    Some(HandRank::RoyalFlush(hand.suit()))
}

fn is_straight_flush(hand: &SortedHand) -> bool {
    is_straight(hand) && is_flush(hand)
}

fn straight_flush(hand: &SortedHand) -> Option<HandRank> {
    Some(HandRank::StraightFlush(hand.top()))
}

fn has_four_of_a_kind(hand: &SortedHand) -> bool {
    hand.rank_with_count(4).is_some()
}

fn four_of_a_kind(hand: &SortedHand) -> Option<HandRank> {
    hand.rank_with_count(4).map(HandRank::FourOfAKind)
}

fn has_full_house(hand: &SortedHand) -> bool {
    hand.rank_with_count(3).is_some() && hand.rank_with_count(2).is_some()
}

fn full_house(hand: &SortedHand) -> Option<HandRank> {
    let trips = hand.rank_with_count(3)?;
    let pair = hand.rank_with_count(2)?;
    Some(HandRank::FullHouse { trips, pair })
}

fn is_flush(hand: &SortedHand) -> bool {
    hand.cards.windows(2).all(|w| w[0].suit() == w[1].suit())
}

fn flush(hand: &SortedHand) -> Option<HandRank> {
    Some(HandRank::Flush(hand.ranks()))
}

/// Five contiguous descending ranks with no duplicates.
///
/// The ace is high only: A-5-4-3-2 never counts as a straight and ranks on
/// its other patterns instead.
fn is_straight(hand: &SortedHand) -> bool {
    hand.cards
        .windows(2)
        .all(|w| w[0].rank() as u8 == w[1].rank() as u8 + 1)
}

fn straight(hand: &SortedHand) -> Option<HandRank> {
    Some(HandRank::Straight(hand.top()))
}

fn has_three_of_a_kind(hand: &SortedHand) -> bool {
    hand.rank_with_count(3).is_some()
}

fn three_of_a_kind(hand: &SortedHand) -> Option<HandRank> {
    hand.rank_with_count(3).map(HandRank::ThreeOfAKind)
}

fn has_two_pair(hand: &SortedHand) -> bool {
    hand.ranks_with_count(2).len() == 2
}

fn two_pair(hand: &SortedHand) -> Option<HandRank> {
    match hand.ranks_with_count(2)[..] {
        [high, low] => {
            let kicker = hand.rank_with_count(1)?;
            Some(HandRank::TwoPair { high, low, kicker })
        }
        _ => None,
    }
}

fn has_one_pair(hand: &SortedHand) -> bool {
    hand.ranks_with_count(2).len() == 1
}

fn one_pair(hand: &SortedHand) -> Option<HandRank> {
    let pair = hand.rank_with_count(2)?;
    let kickers: [Rank; 3] = hand.ranks_with_count(1).try_into().ok()?;
    Some(HandRank::OnePair { pair, kickers })
}

fn any_cards(_: &SortedHand) -> bool {
    true
}

fn high_card(hand: &SortedHand) -> Option<HandRank> {
    Some(HandRank::HighCard(hand.ranks()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use showdown_cards::{Deck, Rank::*};

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    fn rank(s: &str) -> HandRank {
        PatternRanker.rank_hand(&cards(s))
    }

    #[test]
    fn royal_flush() {
        assert_eq!(rank("AS KS QS JS TS"), HandRank::RoyalFlush(Suit::Spades));
        assert!(rank("AS KS QS JS TS") > rank("KH QH JH TH 9H"));
    }

    #[test]
    fn straight_flush() {
        assert_eq!(rank("KH QH JH TH 9H"), HandRank::StraightFlush(King));
        assert_eq!(rank("6C 5C 4C 3C 2C"), HandRank::StraightFlush(Six));
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(rank("9D 9C 9H 9S 2C"), HandRank::FourOfAKind(Nine));

        // Quads beat kings over queens.
        assert!(rank("9D 9C 9H 9S 2C") > rank("KD KC KH QD QC"));
    }

    #[test]
    fn full_house() {
        assert_eq!(
            rank("KD KC KH QD QC"),
            HandRank::FullHouse { trips: King, pair: Queen }
        );
        assert_eq!(
            rank("4D 4C KH KD KC"),
            HandRank::FullHouse { trips: King, pair: Four }
        );
    }

    #[test]
    fn flush() {
        assert_eq!(
            rank("QD TD 8D 5D 3D"),
            HandRank::Flush([Queen, Ten, Eight, Five, Three])
        );
    }

    #[test]
    fn straight() {
        assert_eq!(rank("TC 9H 8D 7C 6S"), HandRank::Straight(Ten));
        assert_eq!(rank("AC KH QD JC TS"), HandRank::Straight(Ace));
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(rank("7C 7D 7H KD 2C"), HandRank::ThreeOfAKind(Seven));
    }

    #[test]
    fn two_pair() {
        assert_eq!(
            rank("TC TD 4H 4S 2D"),
            HandRank::TwoPair { high: Ten, low: Four, kicker: Two }
        );

        // The higher pair wins.
        assert!(rank("TC TD 4H 4S 2D") > rank("8C 8D 7H 7S 2D"));
    }

    #[test]
    fn one_pair() {
        assert_eq!(
            rank("6C 6D AH 9S 2D"),
            HandRank::OnePair { pair: Six, kickers: [Ace, Nine, Two] }
        );
    }

    #[test]
    fn high_card() {
        assert_eq!(
            rank("2C 7D 9H JS KD"),
            HandRank::HighCard([King, Jack, Nine, Seven, Two])
        );
    }

    #[test]
    fn wrong_number_of_cards() {
        assert_eq!(rank(""), HandRank::NotRankable);
        assert_eq!(rank("AS KS QS JS"), HandRank::NotRankable);
        assert_eq!(rank("AS KS QS JS TS 9S"), HandRank::NotRankable);

        // The sentinel loses even to the weakest rankable hand.
        assert!(rank("AS KS QS JS TS 9S") < rank("2C 7D 9H JS KD"));
    }

    #[test]
    fn ace_is_high_only() {
        // A-2-3-4-5 is no straight here, it ranks on its other patterns.
        assert_eq!(
            rank("AS 2D 3C 4H 5S"),
            HandRank::HighCard([Ace, Five, Four, Three, Two])
        );
        assert_eq!(
            rank("AS 2S 3S 4S 5S"),
            HandRank::Flush([Ace, Five, Four, Three, Two])
        );
    }

    #[test]
    fn category_order_beats_spurious_matches() {
        // Multiplicity predicates ask for exact counts, quads are not a pair.
        let quads = SortedHand::new(&cards("9D 9C 9H 9S 2C")).unwrap();
        assert!(!has_one_pair(&quads));
        assert!(has_four_of_a_kind(&quads));

        // A full house satisfies the three of a kind and pair predicates.
        let full = SortedHand::new(&cards("KD KC KH QD QC")).unwrap();
        assert!(has_three_of_a_kind(&full));
        assert!(has_one_pair(&full));
        assert_eq!(
            rank("KD KC KH QD QC"),
            HandRank::FullHouse { trips: King, pair: Queen }
        );

        // A royal flush satisfies both straight and flush predicates.
        let royal = SortedHand::new(&cards("AS KS QS JS TS")).unwrap();
        assert!(is_straight(&royal));
        assert!(is_flush(&royal));
        assert_eq!(rank("AS KS QS JS TS"), HandRank::RoyalFlush(Suit::Spades));
    }

    #[test]
    fn caller_cards_are_not_reordered() {
        let hand = cards("2C 7D 9H JS KD");
        let before = hand.clone();
        let _ = PatternRanker.rank_hand(&hand);
        assert_eq!(hand, before);
    }

    #[test]
    fn classification_is_idempotent() {
        let hand = cards("TC TD 4H 4S 2D");
        let first = PatternRanker.rank_hand(&hand);
        let second = PatternRanker.rank_hand(&hand);
        assert_eq!(first, second);
    }

    #[test]
    fn permutations_rank_equal() {
        let mut hand = cards("TC TD 4H 4S 2D");
        let expected = PatternRanker.rank_hand(&hand);

        let mut rng = rand::rng();
        for _ in 0..20 {
            hand.shuffle(&mut rng);
            assert_eq!(PatternRanker.rank_hand(&hand), expected);
        }
    }

    #[test]
    fn suits_never_break_ties() {
        // Same ranks with swapped suits, none of them flushes.
        let a = rank("TC TD 4H 4S 2D");
        let b = rank("TH TS 4C 4D 2S");
        assert_eq!(a, b);

        let a = rank("2C 7D 9H JS KD");
        let b = rank("2D 7H 9S JC KC");
        assert_eq!(a, b);
    }

    #[test]
    fn census_of_all_hands() {
        // Classify every five cards hand and check the category counts. The
        // wheel hands land in high card and flush because the ace is high
        // only.
        let mut counts = [0usize; 11];

        Deck::default().for_each_hand(|hand| {
            counts[PatternRanker.rank_hand(hand).strength() as usize] += 1;
        });

        assert_eq!(counts[0], 0); // not rankable
        assert_eq!(counts[1], 1_303_560); // high card
        assert_eq!(counts[2], 1_098_240); // one pair
        assert_eq!(counts[3], 123_552); // two pair
        assert_eq!(counts[4], 54_912); // three of a kind
        assert_eq!(counts[5], 9_180); // straight
        assert_eq!(counts[6], 5_112); // flush
        assert_eq!(counts[7], 3_744); // full house
        assert_eq!(counts[8], 624); // four of a kind
        assert_eq!(counts[9], 32); // straight flush
        assert_eq!(counts[10], 4); // royal flush

        assert_eq!(counts.iter().sum::<usize>(), 2_598_960);
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};
use thiserror::Error;

/// Card rank, [Rank::Two] lowest through [Rank::Ace] highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Two
    Two,
    /// Three
    Three,
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
    Ace,
}

impl Rank {
    /// Returns all ranks in ascending order.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank spelled out, used in hand descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name, used in hand descriptions.
    pub fn plural(&self) -> &'static str {
        match self {
            Rank::Two => "Twos",
            Rank::Three => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Two,
            '3' => Rank::Three,
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
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Two => '2',
            Rank::Three => '3',
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
/// Suits have no ordering, only equality matters for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit spelled out, used in hand descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            'C' => Suit::Clubs,
            'D' => Suit::Diamonds,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// A Poker card.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

/// Cards order by rank alone, the suit never breaks a tie.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
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

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => {
                let rank = Rank::from_char(r.to_ascii_uppercase())
                    .ok_or(ParseCardError::InvalidRank(r))?;
                let suit = Suit::from_char(u.to_ascii_uppercase())
                    .ok_or(ParseCardError::InvalidSuit(u))?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(ParseCardError::InvalidLength(s.to_string())),
        }
    }
}

/// Error parsing a card from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCardError {
    /// The rank character is not one of 2-9, T, J, Q, K, A.
    #[error("invalid rank character '{0}'")]
    InvalidRank(char),
    /// The suit character is not one of C, D, H, S.
    #[error("invalid suit character '{0}'")]
    InvalidSuit(char),
    /// The card is not a two characters string.
    #[error("expected a rank and a suit character, got {0:?}")]
    InvalidLength(String),
}

/// A cards Deck.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Card {
        self.cards.pop().unwrap()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure for each five cards hand.
    pub fn for_each_hand<F>(&self, mut f: F)
    where
        F: FnMut(&[Card; 5]),
    {
        let n = self.cards.len();
        if n < 5 {
            return;
        }

        let mut hand = [self.cards[0]; 5];

        for c1 in 0..n {
            hand[0] = self.cards[c1];

            for c2 in (c1 + 1)..n {
                hand[1] = self.cards[c2];

                for c3 in (c2 + 1)..n {
                    hand[2] = self.cards[c3];

                    for c4 in (c3 + 1)..n {
                        hand[3] = self.cards[c4];

                        for c5 in (c4 + 1)..n {
                            hand[4] = self.cards[c5];
                            f(&hand);
                        }
                    }
                }
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_ordering() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let qs = Card::new(Rank::Queen, Suit::Spades);
        assert!(kd > qs);
        assert!(qs < kd);

        // The suit never orders cards of the same rank.
        let kc = Card::new(Rank::King, Suit::Clubs);
        assert_eq!(kd.cmp(&kc), Ordering::Equal);
        assert_ne!(kd, kc);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        let c = "KD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Diamonds));

        // Lower case is accepted.
        let c = "th".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Hearts));

        assert_eq!("1S".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
        assert_eq!("KX".parse::<Card>(), Err(ParseCardError::InvalidSuit('X')));
        assert_eq!(
            "KDX".parse::<Card>(),
            Err(ParseCardError::InvalidLength("KDX".to_string()))
        );
        assert_eq!(
            "".parse::<Card>(),
            Err(ParseCardError::InvalidLength(String::new()))
        );
    }

    #[test]
    fn deck_unique_cards() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            cards.insert(deck.deal());
        }

        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_deal_and_remove() {
        let mut deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), Deck::SIZE - 2);

        let dealt = (0..deck.count()).map(|_| deck.deal()).collect::<Vec<_>>();
        assert!(deck.is_empty());
        assert!(!dealt.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
        assert!(!dealt.contains(&Card::new(Rank::King, Suit::Diamonds)));
    }

    #[test]
    fn deck_for_each_hand() {
        let deck = Deck::default();

        let mut count = 0usize;
        deck.for_each_hand(|hand| {
            assert_eq!(hand.len(), 5);
            count += 1;
        });

        // C(52, 5) five cards hands.
        assert_eq!(count, 2_598_960);
    }
}

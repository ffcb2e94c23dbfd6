// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Cards and hands parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token that is not a rank character followed by a suit character.
    #[error("invalid card token '{0}'")]
    InvalidToken(String),
    /// A hand without cards.
    #[error("a hand needs at least one card")]
    EmptyHand,
}

/// A Poker card.
///
/// Cards are ordered by rank first and suit second, so that sorting a slice of
/// cards gives a deterministic order for cards with the same rank.
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
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

impl FromStr for Card {
    type Err = ParseError;

    /// Parses a two characters token like `TC` or `AS`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidToken(token.to_string());

        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => {
                let rank = Rank::from_char(r).ok_or_else(invalid)?;
                let suit = Suit::from_char(s).ok_or_else(invalid)?;
                Ok(Card::new(rank, suit))
            }
            _ => Err(invalid()),
        }
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

/// Card rank.
///
/// The rank value is the card face value with the ace counting 14, the
/// [Rank::LowAce] is an ace played below the deuce and is never parsed from a
/// token, it is only added by [Hand::with_low_aces](crate::Hand::with_low_aces).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Ace below the deuce.
    LowAce = 1,
    /// Deuce
    Deuce,
    /// Trey
    Trey,
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
    /// Returns all the ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The integer value of this rank, 1 for a low ace to 14 for an ace.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Checks if this rank is exactly one above the `lower` rank.
    pub fn is_above(&self, lower: Rank) -> bool {
        self.value() == lower.value() + 1
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
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
            Rank::LowAce | Rank::Ace => 'A',
            Rank::Deuce => '2',
            Rank::Trey => '3',
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
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Spades suit.
    Spades,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
}

impl Suit {
    /// The number of suits.
    pub const COUNT: usize = 4;

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts].into_iter()
    }

    /// The suit index in `0..Suit::COUNT`, used for per suit tables.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c {
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_from_token() {
        let c = "KD".parse::<Card>().unwrap();
        assert_eq!(c, Card::new(Rank::King, Suit::Diamonds));

        let c = "5S".parse::<Card>().unwrap();
        assert_eq!(c.rank(), Rank::Five);
        assert_eq!(c.suit(), Suit::Spades);

        let c = "TH".parse::<Card>().unwrap();
        assert_eq!(c.rank().value(), 10);

        let c = "AC".parse::<Card>().unwrap();
        assert_eq!(c.rank().value(), 14);
    }

    #[test]
    fn card_invalid_token() {
        for token in ["", "A", "1C", "10D", "AX", "ah", "KDD", "ZS"] {
            assert_eq!(
                token.parse::<Card>(),
                Err(ParseError::InvalidToken(token.to_string())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn card_to_string() {
        for s in Suit::suits() {
            for r in Rank::ranks() {
                let token = Card::new(r, s).to_string();
                assert_eq!(token.parse::<Card>().unwrap(), Card::new(r, s));
            }
        }

        assert_eq!(Card::new(Rank::LowAce, Suit::Hearts).to_string(), "AH");
        assert_eq!(format!("{:?}", Card::new(Rank::Ten, Suit::Clubs)), "Card(TC)");
    }

    #[test]
    fn rank_order() {
        let values = Rank::ranks().map(|r| r.value()).collect::<Vec<_>>();
        assert_eq!(values, (2..=14).collect::<Vec<_>>());

        assert!(Rank::LowAce < Rank::Deuce);
        assert!(Rank::Deuce.is_above(Rank::LowAce));
        assert!(Rank::Ace.is_above(Rank::King));
        assert!(!Rank::Ace.is_above(Rank::Queen));
        assert!(!Rank::King.is_above(Rank::King));
    }

    #[test]
    fn card_order() {
        let mut cards = ["AS", "2H", "AC", "9D", "2C"]
            .iter()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        cards.sort();

        let tokens = cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(tokens, ["2C", "2H", "9D", "AC", "AS"]);
    }
}

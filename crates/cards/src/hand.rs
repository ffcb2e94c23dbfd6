// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands.
use std::fmt;

use crate::{Card, ParseError, Rank};

/// A Poker hand.
///
/// A hand holds its cards sorted in ascending rank order, it is built once and
/// never changed, derived hands like the one returned by [Hand::with_low_aces]
/// are new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the given cards.
    ///
    /// Fails if there are no cards, duplicate cards are not checked.
    pub fn from_cards<I>(cards: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut cards = cards.into_iter().collect::<Vec<_>>();
        if cards.is_empty() {
            return Err(ParseError::EmptyHand);
        }

        cards.sort();
        Ok(Self { cards })
    }

    /// Parses a hand from a sequence of card tokens like `["TD", "TC", "7C"]`.
    ///
    /// Fails on the first invalid token.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|t| t.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// The hand cards in ascending order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false as a hand has at least one card.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns a new hand with a [Rank::LowAce] card added for each ace.
    ///
    /// The low aces have the same suit of their ace and sort before any other
    /// card, this lets a scan over the cards see both A-K and 5-A straights.
    /// This should be called once on a parsed hand.
    pub fn with_low_aces(&self) -> Hand {
        let low_aces = self
            .cards
            .iter()
            .filter(|c| c.rank() == Rank::Ace)
            .map(|c| Card::new(Rank::LowAce, c.suit()));

        let cards = low_aces.chain(self.cards.iter().copied()).collect();
        Hand { cards }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// Parses a hand from a sequence of card tokens, see [Hand::parse].
pub fn parse_hand<I, S>(tokens: I) -> Result<Hand, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Hand::parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Suit;
    use rand::seq::SliceRandom;

    #[test]
    fn parse_sorts_cards() {
        let hand = parse_hand(["AH", "9S", "TC"]).unwrap();
        assert_eq!(hand.to_string(), "9S TC AH");
        assert_eq!(hand.len(), 3);

        let hand = parse_hand("AD JC AC QH 2C JD AH 5S AS".split_whitespace()).unwrap();
        assert_eq!(hand.to_string(), "2C 5S JC JD QH AC AS AD AH");
    }

    #[test]
    fn parse_order_independent() {
        let mut tokens = vec!["TD", "TC", "TH", "7C", "7D", "2S", "AS"];
        let expected = parse_hand(&tokens).unwrap();

        let mut rng = rand::rng();
        for _ in 0..20 {
            tokens.shuffle(&mut rng);
            assert_eq!(parse_hand(&tokens).unwrap(), expected);
        }
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_hand(["AH", "9X", "TC"]),
            Err(ParseError::InvalidToken("9X".to_string()))
        );

        assert_eq!(
            parse_hand(["10D", "JD"]),
            Err(ParseError::InvalidToken("10D".to_string()))
        );

        assert_eq!(parse_hand(Vec::<&str>::new()), Err(ParseError::EmptyHand));
        assert_eq!(Hand::from_cards(Vec::new()), Err(ParseError::EmptyHand));
    }

    #[test]
    fn low_aces() {
        let hand = parse_hand(["AH", "9S", "TC"]).unwrap();
        let both = hand.with_low_aces();
        assert_eq!(
            both.cards(),
            &[
                Card::new(Rank::LowAce, Suit::Hearts),
                Card::new(Rank::Nine, Suit::Spades),
                Card::new(Rank::Ten, Suit::Clubs),
                Card::new(Rank::Ace, Suit::Hearts),
            ]
        );

        // The original hand is unchanged.
        assert_eq!(hand.len(), 3);
        assert_eq!(hand.to_string(), "9S TC AH");

        let hand = parse_hand("AD JC AC QH 2C".split_whitespace()).unwrap();
        let both = hand.with_low_aces();
        assert_eq!(both.len(), 7);
        assert!(both.cards().is_sorted());
        assert_eq!(both.to_string(), "AC AD 2C JC QH AC AD");
    }

    #[test]
    fn low_aces_without_aces() {
        let hand = parse_hand(["KH", "9S", "TC", "2D", "5C"]).unwrap();
        assert_eq!(hand.with_low_aces(), hand);
    }
}

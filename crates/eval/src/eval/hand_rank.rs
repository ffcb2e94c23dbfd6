// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and ranks.
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Hand, Rank};

/// A hand category ordered by strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No pattern, the highest card ranks the hand.
    HighCard = 0,
    /// Two cards of the same rank.
    OnePair,
    /// Two pairs of different ranks.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards of consecutive ranks.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl Category {
    /// The number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// A hand rank.
///
/// Ranks compare by category first and then by the rank of the card that
/// anchors the category pattern, for example the rank of the quad for four of a
/// kind or the highest card of a straight. Hands with equal ranks are tied,
/// remaining cards (kickers) are not compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandRank {
    category: Category,
    tiebreak: Rank,
}

impl HandRank {
    /// Creates a rank for the given category and tiebreak rank.
    pub const fn new(category: Category, tiebreak: Rank) -> Self {
        Self { category, tiebreak }
    }

    /// Evaluates a hand, see [rank](super::rank()).
    pub fn eval(hand: &Hand) -> Self {
        super::rank(hand)
    }

    /// The hand category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The rank that breaks ties between hands of the same category.
    pub fn tiebreak(&self) -> Rank {
        self.tiebreak
    }

    /// The tiebreak integer value, 5 for the wheel to 14 for an ace.
    pub fn tiebreak_value(&self) -> u8 {
        self.tiebreak.value()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            Category::RoyalFlush => write!(f, "{}", self.category),
            _ => write!(f, "{} ({})", self.category, self.tiebreak),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order() {
        let categories = Category::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), Category::COUNT);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(categories.first(), Some(&Category::HighCard));
        assert_eq!(categories.last(), Some(&Category::RoyalFlush));

        for (idx, c) in categories.iter().enumerate() {
            assert_eq!(*c as usize, idx);
        }
    }

    #[test]
    fn rank_order() {
        let pair_of_aces = HandRank::new(Category::OnePair, Rank::Ace);
        let two_pair = HandRank::new(Category::TwoPair, Rank::Trey);
        let pair_of_kings = HandRank::new(Category::OnePair, Rank::King);

        assert!(two_pair > pair_of_aces);
        assert!(pair_of_aces > pair_of_kings);
        assert_eq!(pair_of_kings, HandRank::new(Category::OnePair, Rank::King));
        assert_eq!(pair_of_kings.tiebreak_value(), 13);
    }

    #[test]
    fn rank_to_string() {
        let r = HandRank::new(Category::FullHouse, Rank::Ten);
        assert_eq!(r.to_string(), "Full House (T)");

        let r = HandRank::new(Category::Straight, Rank::Five);
        assert_eq!(r.to_string(), "Straight (5)");

        let r = HandRank::new(Category::RoyalFlush, Rank::Ace);
        assert_eq!(r.to_string(), "Royal Flush");
    }
}

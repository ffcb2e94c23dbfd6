// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories detectors.
//!
//! Each detector takes the hand cards sorted in ascending order and scans them
//! from the highest to the lowest card, folding them into small streak
//! accumulators until the category pattern is complete. The straight and
//! straight flush detectors expect the cards of [Hand::with_low_aces], all the
//! other detectors the plain hand cards.
//!
//! A detector only checks its own pattern, a hand with four of a kind also
//! matches three of a kind and one pair, detectors must be tried from the
//! strongest category down.
//!
//! [Hand::with_low_aces]: showdown_cards::Hand::with_low_aces
use std::ops::ControlFlow::{Break, Continue};

use showdown_cards::{Card, Rank, Suit};

use super::{Category, HandRank};

/// A function that checks a category pattern.
pub type Detector = fn(&[Card]) -> Option<HandRank>;

/// Number of cards in a straight.
const STRAIGHT_LEN: u8 = 5;

/// Number of cards in a flush.
const FLUSH_LEN: usize = 5;

/// Consecutive descending ranks.
#[derive(Debug, Clone, Copy)]
struct Run {
    high: Rank,
    low: Rank,
}

impl Run {
    fn new(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
        }
    }

    /// Adds the next rank of a descending scan, a rank equal to the run low
    /// leaves the run as it is, a gap starts a new run.
    fn push(self, rank: Rank) -> Self {
        if self.low.is_above(rank) {
            Self { low: rank, ..self }
        } else if self.low == rank {
            self
        } else {
            Self::new(rank)
        }
    }

    fn len(&self) -> u8 {
        self.high.value() - self.low.value() + 1
    }
}

fn push_run(run: Option<Run>, rank: Rank) -> Run {
    run.map_or_else(|| Run::new(rank), |run| run.push(rank))
}

/// Cards counted under a rank.
#[derive(Debug, Clone, Copy)]
struct Streak {
    rank: Rank,
    count: usize,
}

impl Streak {
    fn new(rank: Rank) -> Self {
        Self { rank, count: 1 }
    }

    /// Adds a card with the given rank, a different rank starts a new streak.
    fn push(self, rank: Rank) -> Self {
        if self.rank == rank {
            self.bump()
        } else {
            Self::new(rank)
        }
    }

    fn bump(self) -> Self {
        Self {
            count: self.count + 1,
            ..self
        }
    }
}

fn push_streak(streak: Option<Streak>, rank: Rank) -> Streak {
    streak.map_or_else(|| Streak::new(rank), |streak| streak.push(rank))
}

/// The first rank group that made a pair and the current streak.
#[derive(Debug, Clone, Copy, Default)]
struct Groups {
    held: Option<Streak>,
    current: Option<Streak>,
}

/// Five consecutive ranks of the same suit, the royal flush is the ace high one.
pub fn straight_flush(cards: &[Card]) -> Option<HandRank> {
    let high = cards
        .iter()
        .rev()
        .try_fold([None::<Run>; Suit::COUNT], |mut runs, card| {
            let suit = card.suit().index();
            let run = push_run(runs[suit], card.rank());
            if run.len() == STRAIGHT_LEN {
                return Break(run.high);
            }

            runs[suit] = Some(run);
            Continue(runs)
        })
        .break_value()?;

    let category = if high == Rank::Ace {
        Category::RoyalFlush
    } else {
        Category::StraightFlush
    };

    Some(HandRank::new(category, high))
}

/// Four cards of the same rank.
pub fn four_of_a_kind(cards: &[Card]) -> Option<HandRank> {
    of_a_kind(cards, 4, Category::FourOfAKind)
}

/// A triple and a pair, ranked by the triple.
pub fn full_house(cards: &[Card]) -> Option<HandRank> {
    cards
        .iter()
        .rev()
        .try_fold(Groups::default(), |groups, card| {
            let current = push_streak(groups.current, card.rank());

            // Keep the first group that made a pair when its streak ends.
            let held = match (groups.held, groups.current) {
                (None, Some(prev)) if prev.rank != current.rank && prev.count >= 2 => Some(prev),
                (held, _) => held,
            };

            if let Some(held) = held {
                if held.count >= 3 && current.count == 2 {
                    return Break(held.rank);
                }

                if held.count >= 2 && current.count == 3 {
                    return Break(current.rank);
                }
            }

            Continue(Groups {
                held,
                current: Some(current),
            })
        })
        .break_value()
        .map(|rank| HandRank::new(Category::FullHouse, rank))
}

/// Five cards of the same suit, ranked by the highest card of that suit.
pub fn flush(cards: &[Card]) -> Option<HandRank> {
    cards
        .iter()
        .rev()
        .try_fold([None::<Streak>; Suit::COUNT], |mut suits, card| {
            let suit = card.suit().index();
            let streak = suits[suit].map_or_else(|| Streak::new(card.rank()), Streak::bump);
            if streak.count == FLUSH_LEN {
                return Break(streak.rank);
            }

            suits[suit] = Some(streak);
            Continue(suits)
        })
        .break_value()
        .map(|rank| HandRank::new(Category::Flush, rank))
}

/// Five consecutive ranks, ranked by the highest one (five for the wheel).
pub fn straight(cards: &[Card]) -> Option<HandRank> {
    cards
        .iter()
        .rev()
        .try_fold(None::<Run>, |run, card| {
            let run = push_run(run, card.rank());
            if run.len() == STRAIGHT_LEN {
                Break(run.high)
            } else {
                Continue(Some(run))
            }
        })
        .break_value()
        .map(|rank| HandRank::new(Category::Straight, rank))
}

/// Three cards of the same rank.
pub fn three_of_a_kind(cards: &[Card]) -> Option<HandRank> {
    of_a_kind(cards, 3, Category::ThreeOfAKind)
}

/// Two pairs, ranked by the higher pair.
pub fn two_pair(cards: &[Card]) -> Option<HandRank> {
    cards
        .iter()
        .rev()
        .try_fold(Groups::default(), |groups, card| {
            let current = push_streak(groups.current, card.rank());
            let held = match (groups.held, current.count) {
                (Some(held), 2) => return Break(held.rank),
                (None, 2) => Some(current),
                (held, _) => held,
            };

            Continue(Groups {
                held,
                current: Some(current),
            })
        })
        .break_value()
        .map(|rank| HandRank::new(Category::TwoPair, rank))
}

/// Two cards of the same rank.
pub fn one_pair(cards: &[Card]) -> Option<HandRank> {
    of_a_kind(cards, 2, Category::OnePair)
}

/// The highest card, matches any non empty hand.
pub fn high_card(cards: &[Card]) -> Option<HandRank> {
    cards
        .last()
        .map(|card| HandRank::new(Category::HighCard, card.rank()))
}

fn of_a_kind(cards: &[Card], count: usize, category: Category) -> Option<HandRank> {
    cards
        .iter()
        .rev()
        .try_fold(None::<Streak>, |streak, card| {
            let streak = push_streak(streak, card.rank());
            if streak.count == count {
                Break(streak.rank)
            } else {
                Continue(Some(streak))
            }
        })
        .break_value()
        .map(|rank| HandRank::new(category, rank))
}

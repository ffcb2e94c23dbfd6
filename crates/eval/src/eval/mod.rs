// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand ranking.
//!
//! A hand is ranked by trying the category detectors from the strongest
//! category (straight flush) to the weakest (high card) and taking the first
//! one that matches. The resulting [HandRank] carries the category and a single
//! tiebreak rank, remaining cards are not used to break ties.
use showdown_cards::Hand;

pub mod detect;
use detect::Detector;

mod hand_rank;
pub use hand_rank::{Category, HandRank};

/// The cards a detector scans.
#[derive(Debug, Clone, Copy)]
enum Aces {
    /// Aces rank above kings only.
    High,
    /// Aces also rank below deuces.
    Both,
}

/// The detectors in category priority order.
const DETECTORS: [(Detector, Aces); 9] = [
    (detect::straight_flush, Aces::Both),
    (detect::four_of_a_kind, Aces::High),
    (detect::full_house, Aces::High),
    (detect::flush, Aces::High),
    (detect::straight, Aces::Both),
    (detect::three_of_a_kind, Aces::High),
    (detect::two_pair, Aces::High),
    (detect::one_pair, Aces::High),
    (detect::high_card, Aces::High),
];

/// Ranks a hand.
///
/// Any hand ranks at least as [Category::HighCard], hands with less than five
/// cards can only match the categories that fit in their cards.
pub fn rank(hand: &Hand) -> HandRank {
    let both = hand.with_low_aces();

    DETECTORS
        .iter()
        .find_map(|(detector, aces)| match aces {
            Aces::High => detector(hand.cards()),
            Aces::Both => detector(both.cards()),
        })
        .expect("high card matches a non empty hand")
}

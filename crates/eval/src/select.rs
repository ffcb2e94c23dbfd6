// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Winning hands selection.
use log::debug;

use showdown_cards::Hand;

use crate::eval::{HandRank, rank};

/// Returns the hand with the highest rank.
///
/// When more hands tie for the highest rank the first one wins, returns `None`
/// if there are no hands.
pub fn select_winner(hands: &[Hand]) -> Option<&Hand> {
    hands
        .iter()
        .map(|hand| (hand, ranked(hand)))
        .fold(None, |best, (hand, rank)| match best {
            Some((_, best_rank)) if best_rank >= rank => best,
            _ => Some((hand, rank)),
        })
        .map(|(hand, _)| hand)
}

/// Returns all the hands tied for the highest rank in their input order.
pub fn select_winners(hands: &[Hand]) -> Vec<&Hand> {
    let ranks = hands.iter().map(ranked).collect::<Vec<_>>();
    let Some(best) = ranks.iter().max().copied() else {
        return Vec::new();
    };

    hands
        .iter()
        .zip(ranks)
        .filter_map(|(hand, rank)| (rank == best).then_some(hand))
        .collect()
}

fn ranked(hand: &Hand) -> HandRank {
    let rank = rank(hand);
    debug!("Hand {hand} ranked {rank}");
    rank
}

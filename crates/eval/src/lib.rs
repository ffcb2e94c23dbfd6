// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand ranking engine.
//!
//! Ranks hands of five or more cards (for example the seven cards of a hold'em
//! showdown) into one of ten categories, from high card to royal flush, and
//! selects the winning hands. A [HandRank] compares by category and then by the
//! rank of the card that anchors the category, remaining cards (kickers) are
//! not compared so hands that differ only in kickers are tied.
//!
//! ```
//! # use showdown_eval::*;
//! let fh = parse_hand(["TD", "TC", "TH", "7C", "7D"]).unwrap();
//! assert_eq!(rank(&fh), HandRank::new(Category::FullHouse, Rank::Ten));
//!
//! // The ace also plays below the deuce.
//! let wheel = parse_hand(["AS", "2S", "3S", "4S", "5C"]).unwrap();
//! assert_eq!(rank(&wheel), HandRank::new(Category::Straight, Rank::Five));
//!
//! let hands = [wheel, fh.clone()];
//! assert_eq!(select_winner(&hands), Some(&fh));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{Category, HandRank, rank};

pub mod select;
pub use select::{select_winner, select_winners};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Hand, ParseError, Rank, Suit, parse_hand};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card types and the hands parsed from two characters
//! card tokens, a rank character (`2`..`9`, `T`, `J`, `Q`, `K`, `A`) followed
//! by a suit character (`C`, `S`, `D`, `H`):
//!
//! ```
//! # use showdown_cards::*;
//! let ah = "AH".parse::<Card>().unwrap();
//! assert_eq!(ah, Card::new(Rank::Ace, Suit::Hearts));
//!
//! // Hands keep their cards sorted by rank.
//! let hand = parse_hand(["TD", "TC", "TH", "7C", "7D"]).unwrap();
//! assert_eq!(hand.to_string(), "7C 7D TC TD TH");
//!
//! assert!(parse_hand(["TD", "1C"]).is_err());
//! ```
//!
//! and a [Deck] type to iterate all the k-cards hands, for example all the
//! 5 cards hands:
//!
//! ```no_run
//! # use showdown_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, ParseError, Rank, Suit};

mod deck;
pub use deck::Deck;

mod hand;
pub use hand::{Hand, parse_hand};

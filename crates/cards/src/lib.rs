// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerpoker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use jokerpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert_eq!(ah.to_string(), "AH");
//! assert_eq!(td.rank(), Rank::Ten);
//! ```
//!
//! wild [Joker]s that stand for any card of their color, a [Token] type for
//! hands that mix cards and jokers:
//!
//! ```
//! # use jokerpoker_cards::{Joker, Token};
//! let tokens = "6C ?B 8C ?R"
//!     .split_whitespace()
//!     .map(|t| t.parse::<Token>())
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(tokens[1], Token::Joker(Joker::Black));
//! assert_eq!(Joker::Red.substitutes().count(), 26);
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use jokerpoker_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, Rank, Suit};

mod error;
pub use error::ParseError;

mod joker;
pub use joker::{Joker, Token};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerpoker hand evaluator.
//!
//! Finds the best 5 cards hand out of 7 cards by ranking every 5 cards subset,
//! the wild variant allows up to two jokers in the hand, a black joker `?B`
//! that can be any club or spade and a red joker `?R` that can be any heart or
//! diamond.
//!
//! To use the evaluator parse a hand and search its best 5 cards:
//!
//! ```
//! # use jokerpoker_eval::*;
//! let hand = "TD TC TH 7C 7D 8C 8S".parse::<Hand>().unwrap();
//! let best = best_hand(&hand);
//! assert_eq!(hand_rank(&best), HandRank::FullHouse(10, 8));
//!
//! let hand = "TD TC 5H 5C 7C ?R ?B".parse::<WildHand>().unwrap();
//! let best = best_wild_hand(&hand);
//! assert_eq!(hand_rank(&best), HandRank::FourOfAKind(10, 7));
//! ```
//!
//! A [HandRank] orders hands by category first and then by the category tie
//! breaks. Aces are always high, A-2-3-4-5 is not a straight.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod best;
pub use best::{best_hand, best_wild_hand};

mod hand;
pub use hand::{Hand, HandError, WildHand};

pub mod rank;
pub use rank::{HandRank, RankValue, hand_rank};

// Reexport cards types.
pub use jokerpoker_cards::{Card, Color, Deck, Joker, ParseError, Rank, Suit, Token};

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation results output.
use serde::Serialize;
use std::fmt;

use jokerpoker_eval::{Card, Token, WildHand, hand_rank};

/// The best hand found for a hand.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The evaluated hand tokens.
    pub hand: Vec<Token>,
    /// The best 5 cards.
    pub best: [Card; 5],
    /// The best hand category, from 0 to 8.
    pub category: u8,
    /// The best hand category name.
    pub name: &'static str,
}

impl Report {
    /// Creates a report for a hand and its best cards.
    pub fn new(hand: &WildHand, best: [Card; 5]) -> Self {
        let rank = hand_rank(&best);
        let hand = hand
            .cards()
            .iter()
            .map(|c| Token::Card(*c))
            .chain(hand.jokers().iter().map(|j| Token::Joker(*j)))
            .collect();

        Self {
            hand,
            best,
            category: rank.category(),
            name: rank.name(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |tokens: Vec<String>| tokens.join(" ");

        writeln!(
            f,
            "Hand: {}",
            join(self.hand.iter().map(|t| t.to_string()).collect())
        )?;
        writeln!(
            f,
            "Best: {}",
            join(self.best.iter().map(|c| c.to_string()).collect())
        )?;
        write!(f, "Rank: {}", self.name)
    }
}

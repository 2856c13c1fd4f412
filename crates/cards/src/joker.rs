// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wild jokers and hand tokens.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Color, Deck, ParseError};

/// A wild joker.
///
/// A joker can stand for any card with the joker color, a black joker can be
/// any club or spade and a red joker any heart or diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joker {
    /// The `?B` joker.
    Black,
    /// The `?R` joker.
    Red,
}

impl Joker {
    /// Returns the joker color.
    pub fn color(&self) -> Color {
        match self {
            Joker::Black => Color::Black,
            Joker::Red => Color::Red,
        }
    }

    /// Returns the 26 cards this joker can be substituted with.
    pub fn substitutes(self) -> impl Iterator<Item = Card> {
        Deck::of_color(self.color()).into_iter()
    }
}

impl fmt::Display for Joker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Joker::Black => write!(f, "?B"),
            Joker::Red => write!(f, "?R"),
        }
    }
}

impl FromStr for Joker {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "?B" => Ok(Joker::Black),
            "?R" => Ok(Joker::Red),
            _ => Err(ParseError::Joker(token.to_string())),
        }
    }
}

/// A token in a hand, either a card or a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A wild joker.
    Joker(Joker),
}

impl Token {
    /// Returns the card if this token is not a joker.
    pub fn card(&self) -> Option<Card> {
        match self {
            Token::Card(card) => Some(*card),
            Token::Joker(_) => None,
        }
    }

    /// Returns the joker if this token is a joker.
    pub fn joker(&self) -> Option<Joker> {
        match self {
            Token::Card(_) => None,
            Token::Joker(joker) => Some(*joker),
        }
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl From<Joker> for Token {
    fn from(joker: Joker) -> Self {
        Token::Joker(joker)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Joker(joker) => write!(f, "{joker}"),
        }
    }
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if token.starts_with('?') {
            token.parse().map(Token::Joker)
        } else {
            token.parse().map(Token::Card)
        }
    }
}

impl TryFrom<String> for Token {
    type Error = ParseError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Validated 7 cards hands.
use ahash::HashSet;
use std::{fmt, str::FromStr};
use thiserror::Error;

use jokerpoker_cards::{Card, Joker, ParseError, Token};

/// An error creating a hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand doesn't have 7 tokens.
    #[error("A hand must have {size} cards, found {0}", size = Hand::SIZE)]
    Size(usize),
    /// A token is not a valid card or joker.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A card appears more than once.
    #[error("Duplicate card {0}")]
    DuplicateCard(Card),
    /// A joker appears more than once.
    #[error("Duplicate joker {0}")]
    DuplicateJoker(Joker),
    /// A joker in a hand that doesn't allow wild cards.
    #[error("Unexpected joker {0}")]
    UnexpectedJoker(Joker),
}

/// A hand with 7 distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand([Card; 7]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 7;

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card; Hand::SIZE] {
        &self.0
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; Hand::SIZE] = cards
            .try_into()
            .map_err(|_| HandError::Size(cards.len()))?;
        check_duplicate_cards(&cards)?;
        Ok(Self(cards))
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_tokens(s)?
            .into_iter()
            .map(|token| match token {
                Token::Card(card) => Ok(card),
                Token::Joker(joker) => Err(HandError::UnexpectedJoker(joker)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, self.0.iter())
    }
}

/// A 7 cards hand that may include up to one joker of each color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildHand {
    cards: Vec<Card>,
    jokers: Vec<Joker>,
}

impl WildHand {
    /// The concrete cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The jokers in this hand, a black joker comes before a red one.
    pub fn jokers(&self) -> &[Joker] {
        &self.jokers
    }
}

impl TryFrom<&[Token]> for WildHand {
    type Error = HandError;

    fn try_from(tokens: &[Token]) -> Result<Self, Self::Error> {
        if tokens.len() != Hand::SIZE {
            return Err(HandError::Size(tokens.len()));
        }

        let cards = tokens.iter().filter_map(Token::card).collect::<Vec<_>>();
        check_duplicate_cards(&cards)?;

        let mut jokers = Vec::with_capacity(2);
        for joker in [Joker::Black, Joker::Red] {
            match tokens.iter().filter(|t| t.joker() == Some(joker)).count() {
                0 => {}
                1 => jokers.push(joker),
                _ => return Err(HandError::DuplicateJoker(joker)),
            }
        }

        Ok(Self { cards, jokers })
    }
}

impl FromStr for WildHand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(parse_tokens(s)?.as_slice())
    }
}

impl From<Hand> for WildHand {
    fn from(hand: Hand) -> Self {
        Self {
            cards: hand.0.to_vec(),
            jokers: Vec::new(),
        }
    }
}

impl fmt::Display for WildHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let jokers = self.jokers.iter().map(|j| Token::Joker(*j));
        write_joined(f, self.cards.iter().map(|c| Token::Card(*c)).chain(jokers))
    }
}

fn parse_tokens(s: &str) -> Result<Vec<Token>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}

fn check_duplicate_cards(cards: &[Card]) -> Result<(), HandError> {
    let mut seen = HashSet::default();
    match cards.iter().find(|c| !seen.insert(**c)) {
        Some(card) => Err(HandError::DuplicateCard(*card)),
        None => Ok(()),
    }
}

fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    for (idx, item) in items.enumerate() {
        if idx > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }

    Ok(())
}

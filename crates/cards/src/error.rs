// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Token parsing errors.
use thiserror::Error;

/// An error parsing a card or joker token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not two characters long.
    #[error("Invalid token length {0:?}")]
    Length(String),
    /// The rank symbol is not one of `23456789TJQKA`.
    #[error("Invalid rank {0:?}")]
    Rank(char),
    /// The suit symbol is not one of `CDHS`.
    #[error("Invalid suit {0:?}")]
    Suit(char),
    /// The token starts with `?` but it is not `?B` or `?R`.
    #[error("Invalid joker {0:?}")]
    Joker(String),
}

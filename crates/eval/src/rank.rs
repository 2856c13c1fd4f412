// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
//!
//! A 5 cards hand is ranked by extracting its rank values sorted from highest
//! to lowest and checking the hand shape from the strongest category to the
//! weakest, the first category that matches gives the [HandRank].
//!
//! Aces are always high, so A-2-3-4-5 is not a straight.
use std::fmt;

use jokerpoker_cards::Card;

/// A card rank numeric value, from 2 for a deuce to 14 for an ace.
pub type RankValue = u8;

/// The rank of a 5 cards hand.
///
/// Variants are declared from the weakest to the strongest category so that
/// the derived ordering compares the category first and then the tie-break
/// values in order. Rank arrays are sorted from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No pairs, ranked by all the cards.
    HighCard([RankValue; 5]),
    /// The pair rank and all the cards.
    OnePair(RankValue, [RankValue; 5]),
    /// The high and low pair ranks and all the cards.
    TwoPair((RankValue, RankValue), [RankValue; 5]),
    /// The trips rank and all the cards.
    ThreeOfAKind(RankValue, [RankValue; 5]),
    /// The straight highest rank.
    Straight(RankValue),
    /// All the cards.
    Flush([RankValue; 5]),
    /// The trips rank and the pair rank.
    FullHouse(RankValue, RankValue),
    /// The quads rank and the kicker.
    FourOfAKind(RankValue, RankValue),
    /// The straight highest rank.
    StraightFlush(RankValue),
}

impl HandRank {
    /// The hand category, from 0 for a high card to 8 for a straight flush.
    pub fn category(&self) -> u8 {
        match self {
            HandRank::HighCard(..) => 0,
            HandRank::OnePair(..) => 1,
            HandRank::TwoPair(..) => 2,
            HandRank::ThreeOfAKind(..) => 3,
            HandRank::Straight(..) => 4,
            HandRank::Flush(..) => 5,
            HandRank::FullHouse(..) => 6,
            HandRank::FourOfAKind(..) => 7,
            HandRank::StraightFlush(..) => 8,
        }
    }

    /// The hand category name.
    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard(..) => "High Card",
            HandRank::OnePair(..) => "One Pair",
            HandRank::TwoPair(..) => "Two Pair",
            HandRank::ThreeOfAKind(..) => "Three of a Kind",
            HandRank::Straight(..) => "Straight",
            HandRank::Flush(..) => "Flush",
            HandRank::FullHouse(..) => "Full House",
            HandRank::FourOfAKind(..) => "Four of a Kind",
            HandRank::StraightFlush(..) => "Straight Flush",
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Ranks a 5 cards hand.
pub fn hand_rank(hand: &[Card; 5]) -> HandRank {
    let ranks = card_ranks(hand);
    let high = ranks[0];

    if straight(&ranks) && flush(hand) {
        return HandRank::StraightFlush(high);
    }

    if let (Some(quads), Some(kicker)) = (kind(4, &ranks), kind(1, &ranks)) {
        return HandRank::FourOfAKind(quads, kicker);
    }

    if let (Some(trips), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
        return HandRank::FullHouse(trips, pair);
    }

    if flush(hand) {
        return HandRank::Flush(ranks);
    }

    if straight(&ranks) {
        return HandRank::Straight(high);
    }

    if let Some(trips) = kind(3, &ranks) {
        return HandRank::ThreeOfAKind(trips, ranks);
    }

    if let Some(pairs) = two_pair(&ranks) {
        return HandRank::TwoPair(pairs, ranks);
    }

    if let Some(pair) = kind(2, &ranks) {
        return HandRank::OnePair(pair, ranks);
    }

    HandRank::HighCard(ranks)
}

/// Returns the cards rank values sorted from highest to lowest.
pub fn card_ranks<const N: usize>(hand: &[Card; N]) -> [RankValue; N] {
    let mut ranks = hand.map(|c| c.rank().value());
    ranks.sort_unstable_by(|a, b| b.cmp(a));
    ranks
}

/// Checks if all the cards have the same suit.
pub fn flush(hand: &[Card]) -> bool {
    hand.windows(2).all(|w| w[0].suit() == w[1].suit())
}

/// Checks if the ranks are consecutive values.
///
/// The ranks must be sorted from highest to lowest.
pub fn straight(ranks: &[RankValue]) -> bool {
    ranks.windows(2).all(|w| w[0] == w[1] + 1)
}

/// Returns the first rank that appears exactly `n` times in `ranks`.
///
/// The ranks must be sorted from highest to lowest so that when more than one
/// rank appears `n` times the highest one is returned.
pub fn kind(n: usize, ranks: &[RankValue]) -> Option<RankValue> {
    ranks
        .iter()
        .copied()
        .find(|&rank| ranks.iter().filter(|&&r| r == rank).count() == n)
}

/// Returns the high and low ranks of the first two pairs in `ranks`.
///
/// The ranks must be sorted from highest to lowest so that the first pair
/// found is the highest.
pub fn two_pair(ranks: &[RankValue]) -> Option<(RankValue, RankValue)> {
    let mut pairs = ranks
        .iter()
        .copied()
        .filter(|&rank| ranks.iter().filter(|&&r| r == rank).count() == 2);

    // Each pair rank is yielded twice.
    let high = pairs.next()?;
    let low = pairs.find(|&rank| rank != high)?;
    Some((high, low))
}

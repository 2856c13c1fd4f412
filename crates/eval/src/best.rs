// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best 5 cards hand search.
//!
//! The search is exhaustive: [best_hand] ranks all the 21 5-cards hands out of
//! 7 cards, and [best_wild_hand] runs [best_hand] for each joker substitution,
//! up to 26 * 26 hands when both jokers are in the hand.
use log::debug;

use jokerpoker_cards::{Card, Deck, Rank, Suit};

use crate::{Hand, HandRank, WildHand, hand_rank};

/// Returns the best 5 cards out of a 7 cards hand.
///
/// When more than one 5 cards hand has the best rank the first in enumeration
/// order is returned.
pub fn best_hand(hand: &Hand) -> [Card; 5] {
    best_of(hand.cards()).0
}

/// Returns the best 5 cards out of a 7 cards hand that may include jokers.
///
/// Each joker is replaced with every card of its color that is not already in
/// the hand, the returned cards never include a joker.
pub fn best_wild_hand(hand: &WildHand) -> [Card; 5] {
    let candidates = substitutions(hand);
    debug!("Evaluating {} substitutions for {hand}", candidates.len());

    candidates
        .iter()
        .map(best_of)
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
        .map(|(cards, _)| cards)
        .expect("a wild hand has at least one substitution")
}

/// Ranks all 5 cards hands and returns the first one with the highest rank.
fn best_of(cards: &[Card; Hand::SIZE]) -> ([Card; 5], HandRank) {
    let first = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let mut best = (first, hand_rank(&first));

    Deck::from(cards.to_vec()).for_each(5, |h| {
        let mut candidate = first;
        candidate.copy_from_slice(h);

        let rank = hand_rank(&candidate);
        if rank > best.1 {
            best = (candidate, rank);
        }
    });

    best
}

/// Returns all the 7 cards hands obtained replacing the hand jokers.
///
/// A black joker substitution comes before a red one so black substitutes
/// vary the slowest.
fn substitutions(hand: &WildHand) -> Vec<[Card; Hand::SIZE]> {
    let cards = hand.cards();
    let mut base = [Card::new(Rank::Deuce, Suit::Clubs); Hand::SIZE];
    base[..cards.len()].copy_from_slice(cards);

    let mut hands = vec![base];
    for (idx, joker) in hand.jokers().iter().enumerate() {
        let slot = cards.len() + idx;
        let mut expanded = Vec::with_capacity(hands.len() * 26);

        for h in &hands {
            for card in joker.substitutes().filter(|c| !cards.contains(c)) {
                let mut h = *h;
                h[slot] = card;
                expanded.push(h);
            }
        }

        hands = expanded;
    }

    hands
}

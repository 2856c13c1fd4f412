// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example all5
// ...
// Total hands      2598960
// ...
//
// High Card:       1303560
// One  Pair:       1098240
// Two Pairs:       123552
// Three of a Kind: 54912
// Straight:         9180
// Flush:           5112
// Full House:      3744
// Four of a Kind:  624
// Straight Flush:  36
// ```

use std::time::Instant;

use jokerpoker_eval::*;

fn main() {
    // Rank all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 9];

    Deck::default().for_each(5, |hand| {
        let mut cards = [hand[0]; 5];
        cards.copy_from_slice(hand);
        counts[hand_rank(&cards).category() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    println!("High Card:       {}", counts[0]);
    println!("One  Pair:       {}", counts[1]);
    println!("Two Pairs:       {}", counts[2]);
    println!("Three of a Kind: {}", counts[3]);
    println!("Straight:         {}", counts[4]);
    println!("Flush:           {}", counts[5]);
    println!("Full House:      {}", counts[6]);
    println!("Four of a Kind:  {}", counts[7]);
    println!("Straight Flush:  {}", counts[8]);
}

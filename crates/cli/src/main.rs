// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jokerpoker CLI.
//!
//! Prints the best 5 cards hand out of 7 cards given on the command line or
//! dealt at random, use `?B` and `?R` for the black and red jokers.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use rand::prelude::*;

use jokerpoker_eval::{Deck, Hand, Joker, Token, WildHand, best_hand, best_wild_hand};

mod report;
use report::Report;

#[derive(Debug, Parser)]
struct Cli {
    /// The hand 7 cards, for example 6C 7C 8C 9C TC 5C ?B.
    #[clap(required_unless_present = "random")]
    cards: Vec<String>,
    /// Deal a random hand.
    #[clap(long, short, conflicts_with = "cards")]
    random: bool,
    /// Number of jokers in a random hand.
    #[clap(long, short, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    jokers: u8,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
}

/// Where the evaluated hand comes from.
#[derive(Debug, PartialEq)]
enum Source {
    /// Tokens from the command line.
    Tokens(Vec<String>),
    /// A random hand with the given number of jokers.
    Random { jokers: usize },
}

/// The evaluation configuration.
#[derive(Debug)]
struct Config {
    source: Source,
    json: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = if cli.random {
            Source::Random {
                jokers: cli.jokers as usize,
            }
        } else {
            Source::Tokens(cli.cards)
        };

        Self {
            source,
            json: cli.json,
        }
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(Config::from(cli)) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let hand = match config.source {
        Source::Tokens(tokens) => tokens
            .join(" ")
            .parse::<WildHand>()
            .context("Invalid hand")?,
        Source::Random { jokers } => random_hand(&mut rand::rng(), jokers)?,
    };

    info!("Evaluating hand {hand}");

    // Jokers need the wild search.
    let best = if hand.jokers().is_empty() {
        best_hand(&Hand::try_from(hand.cards())?)
    } else {
        best_wild_hand(&hand)
    };

    let report = Report::new(&hand, best);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}

/// Deals a random hand replacing `jokers` cards with jokers, black first.
fn random_hand<R: Rng>(rng: &mut R, jokers: usize) -> Result<WildHand> {
    let mut deck = Deck::new_and_shuffled(rng);

    let mut tokens = Vec::with_capacity(Hand::SIZE);
    for _ in jokers..Hand::SIZE {
        let card = deck.deal().context("Not enough cards in the deck")?;
        tokens.push(Token::Card(card));
    }

    tokens.extend(
        [Joker::Black, Joker::Red]
            .into_iter()
            .take(jokers)
            .map(Token::Joker),
    );

    Ok(WildHand::try_from(tokens.as_slice())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn parse_cli() {
        let cli = Cli::try_parse_from(["jokerpoker", "6C", "7C", "8C", "9C", "TC", "5C", "?B"])
            .unwrap();
        let config = Config::from(cli);
        assert!(!config.json);
        assert_eq!(
            config.source,
            Source::Tokens(
                ["6C", "7C", "8C", "9C", "TC", "5C", "?B"]
                    .map(String::from)
                    .to_vec()
            )
        );

        let cli = Cli::try_parse_from(["jokerpoker", "--random", "--jokers", "2", "--json"])
            .unwrap();
        let config = Config::from(cli);
        assert!(config.json);
        assert_eq!(config.source, Source::Random { jokers: 2 });

        assert!(Cli::try_parse_from(["jokerpoker"]).is_err());
        assert!(Cli::try_parse_from(["jokerpoker", "--random", "--jokers", "3"]).is_err());
        assert!(Cli::try_parse_from(["jokerpoker", "--random", "6C"]).is_err());
    }

    #[test]
    fn random_hands() {
        let mut rng = StdRng::seed_from_u64(42);

        for jokers in 0..=2 {
            let hand = random_hand(&mut rng, jokers).unwrap();
            assert_eq!(hand.jokers().len(), jokers);
            assert_eq!(hand.cards().len(), Hand::SIZE - jokers);
        }
    }

    #[test]
    fn run_hands() {
        let config = Config {
            source: Source::Tokens(vec!["TD TC 5H 5C 7C ?R ?B".to_string()]),
            json: false,
        };
        assert!(run(config).is_ok());

        let config = Config {
            source: Source::Tokens(vec!["TD".to_string(), "TD".to_string()]),
            json: true,
        };
        assert!(run(config).is_err());

        let config = Config {
            source: Source::Random { jokers: 1 },
            json: true,
        };
        assert!(run(config).is_ok());
    }
}

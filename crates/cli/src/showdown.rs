// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands parsing, ranking and report.
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

use showdown_eval::{Hand, parse_hand, rank, select_winner, select_winners};

/// The showdown configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The hands card tokens, separated by spaces or commas.
    pub hands: Vec<String>,
    /// Report all hands tied for the win.
    pub ties: bool,
}

/// Parses a hand argument like "TD TC TH 7C 7D" or "TD,TC,TH,7C,7D".
fn parse_arg(arg: &str) -> Result<Hand> {
    let tokens = arg
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());
    Ok(parse_hand(tokens)?)
}

/// Ranks the configured hands and writes the report to `out`.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let hands = config
        .hands
        .iter()
        .enumerate()
        .map(|(idx, arg)| parse_arg(arg).with_context(|| format!("Hand {} '{arg}'", idx + 1)))
        .collect::<Result<Vec<_>>>()?;

    info!("Ranking {} hands", hands.len());

    for (idx, hand) in hands.iter().enumerate() {
        writeln!(out, "Hand {}: {hand}  {}", idx + 1, rank(hand))?;
    }

    let winners = if config.ties {
        select_winners(&hands)
    } else {
        select_winner(&hands).into_iter().collect()
    };

    for hand in winners {
        writeln!(out, "Winner: {hand}  {}", rank(hand))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(hands: &[&str], ties: bool) -> Result<String> {
        let config = Config {
            hands: hands.iter().map(|h| h.to_string()).collect(),
            ties,
        };

        let mut out = Vec::new();
        run(&config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn report_winner() {
        let out = report(&["6C 7C 8C 9C TC", "9D,9H,9S,9C,7D", "TD TC TH 7C 7D"], false).unwrap();
        let expected = "\
Hand 1: 6C 7C 8C 9C TC  Straight Flush (T)
Hand 2: 7D 9C 9S 9D 9H  Four of a Kind (9)
Hand 3: 7C 7D TC TD TH  Full House (T)
Winner: 6C 7C 8C 9C TC  Straight Flush (T)
";
        assert_eq!(out, expected);
    }

    #[test]
    fn report_ties() {
        let hands = ["TD TC TH 7C 7D", "TS TC TH 7S 7H"];
        let out = report(&hands, true).unwrap();
        assert_eq!(out.lines().filter(|l| l.starts_with("Winner:")).count(), 2);

        let out = report(&hands, false).unwrap();
        let winners = out
            .lines()
            .filter(|l| l.starts_with("Winner:"))
            .collect::<Vec<_>>();
        assert_eq!(winners, ["Winner: 7C 7D TC TD TH  Full House (T)"]);
    }

    #[test]
    fn report_invalid_token() {
        let err = report(&["6C 7C 8C 9C TC", "9D 9H 1S"], false).unwrap_err();
        assert_eq!(err.to_string(), "Hand 2 '9D 9H 1S'");
        assert_eq!(err.root_cause().to_string(), "invalid card token '1S'");

        let err = report(&[" , "], false).unwrap_err();
        assert_eq!(err.root_cause().to_string(), "a hand needs at least one card");
    }
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Thin CLI driver around the search core.
//!
//! Reads whitespace-separated pool numbers from an input file, skipping
//! invalid tokens with a warning, streams every valid combination to the
//! output file, and reports the before/after totals.

use anyhow::{Context, Result};
use clap::Parser;
use lotto_search::constraints::Constraint;
use lotto_search::pool::{NumberPool, MAX_NUMBER, MIN_NUMBER};
use lotto_search::search::{self, WriteSink};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

/// Generate all valid 6-number lotto combinations from a pool of numbers.
#[derive(Parser)]
#[command(name = "lotto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File containing the pool: 7 to 49 unique numbers between 1 and 49,
    /// whitespace separated.
    #[arg(short, long, default_value = "input.txt")]
    input: PathBuf,

    /// File receiving the valid combinations, one per line.
    #[arg(short, long, default_value = "lotto-combinations.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let pool = NumberPool::new(read_pool(&text))?;

    println!(
        "Total combinations before filtering: {}",
        pool.total_combinations()
    );

    let file = fs::File::create(&cli.output)
        .with_context(|| format!("failed to create {}", cli.output.display()))?;
    let mut sink = WriteSink::new(BufWriter::new(file));
    let statistics = search::search(&pool, &mut sink)?;
    sink.into_inner()
        .flush()
        .context("failed to flush output file")?;

    for constraint in Constraint::iter() {
        debug!(
            "rejected by {}: {}",
            constraint.name(),
            statistics.rejected(constraint)
        );
    }

    if statistics.valid() == 0 {
        println!("There were no combinations after filtering!");
    } else {
        println!(
            "Total combinations after filtering: {}",
            statistics.valid()
        );
    }
    println!(
        "All valid combinations are written to file {}",
        cli.output.display()
    );

    Ok(())
}

/// Parse pool tokens, skipping non-integers, out-of-range numbers, and
/// duplicates with a warning each. Deduplication and range checking happen
/// here; the pool itself only enforces size bounds.
fn read_pool(text: &str) -> Vec<u8> {
    let mut numbers: Vec<u8> = Vec::new();
    for token in text.split_whitespace() {
        match token.parse::<i64>() {
            Ok(value) if (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&value) => {
                let value = value as u8;
                if numbers.contains(&value) {
                    warn!("Duplicate number {} found and skipped.", value);
                } else {
                    numbers.push(value);
                }
            }
            Ok(value) => warn!("Skipping out-of-range number: {}", value),
            Err(_) => warn!("Skipping invalid input: {}", token),
        }
    }
    numbers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_pool_clean_input() {
        assert_eq!(read_pool("5 9 14 22 28 33 41"), vec![5, 9, 14, 22, 28, 33, 41]);
    }

    #[test]
    fn test_read_pool_skips_bad_tokens() {
        // Non-integers, out-of-range values, and duplicates are dropped.
        let numbers = read_pool("5 banana 9 0 50 -3 9 14");
        assert_eq!(numbers, vec![5, 9, 14]);
    }

    #[test]
    fn test_read_pool_handles_newlines() {
        assert_eq!(read_pool("1\n2\n3\n"), vec![1, 2, 3]);
    }
}

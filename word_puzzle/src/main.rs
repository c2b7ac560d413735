use std::{
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use word_puzzle::{load_dictionary_file, new_dictionary, parse_grid, scan, Dictionary};

/// Find dictionary words hidden in a letter grid.
#[derive(Parser)]
#[command(name = "word_puzzle", version)]
struct Cli {
    /// Approximate number of words in the dictionary; the table starts at twice this
    word_count: usize,
    /// Newline separated word list
    dictionary: PathBuf,
    /// Row count, column count and a line of row-major letters
    puzzle: PathBuf,
}

fn print_stats(dictionary: &Dictionary) {
    eprintln!(
        "Number of words {}, Table size {}, Load factor {}",
        dictionary.len(),
        dictionary.capacity(),
        dictionary.load_factor()
    );
    eprintln!(
        "Collisions {}, Average chain length {}, Longest chain length {}",
        dictionary.collisions(),
        dictionary.avg_chain_length(),
        dictionary.longest_chain()
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let mut dictionary = new_dictionary(cli.word_count);
    let start = Instant::now();
    // keep whatever was read before a failure and still solve the puzzle
    match load_dictionary_file(&cli.dictionary, &mut dictionary) {
        Ok(loaded) => info!(loaded, elapsed = ?start.elapsed(), "read dictionary"),
        Err(e) => error!("error reading dictionary file: {:#}", anyhow::Error::new(e)),
    }
    print_stats(&dictionary);

    let input = fs::read_to_string(&cli.puzzle)
        .with_context(|| format!("failed to read puzzle file {}", cli.puzzle.display()))?;
    let grid = parse_grid(&input)
        .with_context(|| format!("malformed puzzle file {}", cli.puzzle.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), "read puzzle");

    let start = Instant::now();
    let matches = scan(&grid, &dictionary);
    info!(elapsed = ?start.elapsed(), "scanned puzzle");

    let mut out = BufWriter::new(io::stdout().lock());
    for m in &matches {
        writeln!(out, "{}", m)?;
    }
    writeln!(out, "{} words found", matches.len())?;
    out.flush()?;
    Ok(())
}

//! The application binary of the grid-trace project.
//!
//! Read a board of letters and a word list, then print the words that can be
//! traced on the board as a path of horizontally or vertically adjacent
//! cells, each cell being used at most once per word.
//!
//! See the [grid-trace-core](../grid_trace_core/index.html) crate for
//! documentation about the search itself.

use clap::Parser;
use error::*;
use grid_trace_core::{find_words_measured, find_words_naive, SolverConfig, Timings};
use snafu::{ensure, ResultExt};
use std::path::PathBuf;

mod error;
mod input;
mod logging;
mod report;

/// Find the words of a word list that can be traced on a board of letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the board file, one row of letters per line
    board: PathBuf,

    /// Path to the word file, one word per line
    words: PathBuf,

    /// Keep the words whose letters are not all on the board
    #[arg(long)]
    no_prefilter: bool,

    /// Always search words from their first letter
    #[arg(long)]
    no_orient: bool,

    /// Print a word as many times as it was found
    #[arg(long)]
    keep_duplicates: bool,

    /// Print the found words as a JSON array
    #[arg(long)]
    json: bool,

    /// Print the time spent in every phase on the standard error stream
    #[arg(long)]
    timings: bool,

    /// Check the result against a word-by-word search
    #[arg(long)]
    verify: bool,

    /// Enable debug logs
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            prefilter: !self.no_prefilter,
            orient: !self.no_orient,
            dedup: !self.keep_duplicates,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.debug);

    let board = input::read_board(&cli.board)?;
    let words = input::read_words(&cli.words)?;

    let mut timings = Timings::new();
    let found = find_words_measured(&board, &words, cli.solver_config(), &mut timings)
        .context(Solve)?;

    if cli.timings {
        eprint!("{}", timings);
    }

    if cli.verify {
        let expected = find_words_naive(&board, &words);
        let (missing, unexpected) = report::diff_words(&found, &expected);
        ensure!(
            missing.is_empty() && unexpected.is_empty(),
            Verify {
                missing,
                unexpected
            }
        );
        log::info!("Verified {} words against the reference search", expected.len());
    }

    if cli.json {
        println!("{}", report::words_to_json(&found));
    } else {
        print!("{}", report::words_to_lines(&found));
    }

    Ok(())
}

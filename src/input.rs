use crate::error::*;
use grid_trace_core::Board;
use snafu::ResultExt;
use std::{fs::File, io::Read, path::Path};

fn read_to_string(path: &Path) -> Result<String> {
    let mut file = File::open(path).context(FileOpen { path })?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .context(FileRead { path })?;
    Ok(content)
}

/// Read a board file, one row per line.
pub fn read_board(path: &Path) -> Result<Board> {
    let content = read_to_string(path)?;
    let board: Board = content.parse().context(BoardParse { path })?;

    log::debug!(
        "Loaded a {}x{} board from {}",
        board.rows(),
        board.cols(),
        path.display()
    );
    Ok(board)
}

/// Read a word file, one word per line.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = read_to_string(path)?;
    let words = parse_words(&content);

    log::debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Trim and lowercase every line. Blank lines are skipped, and so are the
/// words with characters the board cannot hold.
fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let word = line.trim().to_ascii_lowercase();
            if word.is_empty() {
                return None;
            }
            if !word.bytes().all(|c| c.is_ascii_lowercase()) {
                log::warn!("Skipping word {:?} at line {}", line.trim(), number + 1);
                return None;
            }
            Some(word)
        })
        .collect()
}

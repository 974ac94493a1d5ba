//! Cheap checks run on the word list before building the pattern tree.
//!
//! Neither step changes which words are found: discarded words could not be
//! traced anyway, and a reversed word is traced by the reversed path.

use crate::{
    board::{letter_slot, ALPHABET_LEN},
    Board, Terminal,
};

/// How many times every letter of the alphabet appears in a sequence of letters.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_LEN],
}

impl LetterCounts {
    pub fn from_letters(letters: &[u8]) -> Self {
        let mut counts = [0; ALPHABET_LEN];
        for &letter in letters {
            counts[letter_slot(letter)] += 1;
        }
        Self { counts }
    }

    /// Return the count of a lowercase letter.
    pub fn count(&self, letter: u8) -> u32 {
        self.counts[letter_slot(letter)]
    }

    /// Return whether every letter of the word is available at least
    /// as many times as the word uses it.
    pub fn fits(&self, word: &str) -> bool {
        let mut remaining = self.counts;
        word.bytes().all(|letter| {
            let slot = &mut remaining[letter_slot(letter)];
            if *slot == 0 {
                false
            } else {
                *slot -= 1;
                true
            }
        })
    }
}

/// The direction in which a word is inserted in the tree and searched on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Forward,
    Reversed,
}

/// Length of the run of identical letters at the start of the word.
fn leading_run(word: &[u8]) -> usize {
    word.iter().take_while(|&&c| c == word[0]).count()
}

/// Length of the run of identical letters at the end of the word.
fn trailing_run(word: &[u8]) -> usize {
    let last = word[word.len() - 1];
    word.iter().rev().take_while(|&&c| c == last).count()
}

/// Choose the direction to search a word in.
///
/// A long run of repeated letters at the start of a word matches many short
/// paths that die later. Start from the end with the shorter run instead.
///
/// Equal runs keep the word forward, a leading run longer by a single letter
/// reverses it. The direction never changes which words are found.
pub fn orientation(word: &str) -> Orientation {
    let bytes = word.as_bytes();
    if bytes.is_empty() || leading_run(bytes) <= trailing_run(bytes) {
        Orientation::Forward
    } else {
        Orientation::Reversed
    }
}

/// Which of the preparation steps to run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PrepareOptions {
    /// Discard words whose letters cannot fit on the board.
    pub prefilter: bool,
    /// Reverse words according to [orientation].
    pub orient: bool,
}

/// A word ready to be inserted in the [PatternTree](crate::PatternTree).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Candidate {
    /// The string to search, reversed if the original word was.
    pub search: String,
    /// [Terminal::Forward] or [Terminal::Reversed], to emit the original word.
    pub terminal: Terminal,
}

impl Candidate {
    pub fn new(word: &str, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Forward => Self {
                search: word.to_owned(),
                terminal: Terminal::Forward,
            },
            Orientation::Reversed => Self {
                search: word.chars().rev().collect(),
                terminal: Terminal::Reversed,
            },
        }
    }
}

/// Turn validated lowercase words into tree candidates.
pub fn prepare<S: AsRef<str>>(board: &Board, words: &[S], options: PrepareOptions) -> Vec<Candidate> {
    let counts = board.letter_counts();

    let candidates: Vec<_> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| {
            !options.prefilter || (word.len() <= board.len() && counts.fits(word))
        })
        .map(|word| {
            let orientation = if options.orient {
                orientation(word)
            } else {
                Orientation::Forward
            };
            Candidate::new(word, orientation)
        })
        .collect();

    log::debug!(
        "Kept {} of {} words after preparation",
        candidates.len(),
        words.len()
    );

    candidates
}

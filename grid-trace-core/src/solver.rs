use crate::{
    error::*,
    measure::{timed, Measure, NoMeasure, Phase},
    prefilter::{prepare, PrepareOptions},
    Board, BoardWalker, PatternTree,
};
use snafu::ensure;
use std::collections::HashSet;

/// Options of a word search. All of them are enabled by default.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SolverConfig {
    /// Discard the words whose letters are not all on the board.
    pub prefilter: bool,
    /// Search some words backwards, see [orientation](crate::orientation).
    pub orient: bool,
    /// Report every found word once.
    pub dedup: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prefilter: true,
            orient: true,
            dedup: true,
        }
    }
}

impl SolverConfig {
    fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            prefilter: self.prefilter,
            orient: self.orient,
        }
    }
}

/// Check that every word is non-empty and only made of lowercase ASCII letters.
pub fn validate_words<S: AsRef<str>>(words: &[S]) -> Result<()> {
    for (index, word) in words.iter().map(AsRef::as_ref).enumerate() {
        ensure!(!word.is_empty(), EmptyWord { index });
        ensure!(
            word.bytes().all(|c| c.is_ascii_lowercase()),
            InvalidWord { index, word }
        );
    }
    Ok(())
}

/// Return the words that can be traced on the board.
pub fn find_words<S: AsRef<str>>(
    board: &Board,
    words: &[S],
    config: SolverConfig,
) -> Result<Vec<String>> {
    find_words_measured(board, words, config, &mut NoMeasure)
}

/// Same as [find_words], reporting the time spent in every [Phase].
pub fn find_words_measured<S: AsRef<str>>(
    board: &Board,
    words: &[S],
    config: SolverConfig,
    measure: &mut dyn Measure,
) -> Result<Vec<String>> {
    validate_words(words)?;

    let candidates = timed(measure, Phase::Prefilter, || {
        prepare(board, words, config.prepare_options())
    });
    let tree = timed(measure, Phase::BuildTree, || PatternTree::build(&candidates));
    let walk = timed(measure, Phase::FindWords, || BoardWalker::new(board, &tree).walk());

    let mut found = walk.words;
    if config.dedup {
        let mut seen = HashSet::with_capacity(found.len());
        found.retain(|word| seen.insert(word.clone()));
    }

    log::info!("Found {} words out of {}", found.len(), words.len());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::time::Duration;

    #[test]
    fn rejects_invalid_words() {
        assert!(validate_words(&["abc", "z"]).is_ok());
        assert!(matches!(
            validate_words(&["abc", ""]),
            Err(Error::EmptyWord { index: 1 })
        ));
        assert!(matches!(
            validate_words(&["Abc"]),
            Err(Error::InvalidWord { index: 0, .. })
        ));
        assert!(matches!(
            validate_words(&["ab-c"]),
            Err(Error::InvalidWord { index: 0, .. })
        ));
    }

    #[test]
    fn invalid_words_fail_the_search() {
        let board = Board::new(&["ab"]).unwrap();
        let res = find_words(&board, &["ab", "a b"], SolverConfig::default());
        assert!(matches!(res, Err(Error::InvalidWord { index: 1, .. })));
    }

    #[test]
    fn duplicate_words_are_reported_once() {
        let board = Board::new(&["ab", "cd"]).unwrap();
        let found = find_words(&board, &["ab", "abd", "ab"], SolverConfig::default()).unwrap();
        assert_eq!(found, vec!["ab", "abd"]);
    }

    #[test]
    fn every_phase_is_measured() {
        let board = Board::new(&["ab", "cd"]).unwrap();
        let mut phases = Vec::new();
        let mut collect = |phase: Phase, _: Duration| phases.push(phase);
        find_words_measured(&board, &["ab"], SolverConfig::default(), &mut collect).unwrap();
        assert_eq!(
            phases,
            vec![Phase::Prefilter, Phase::BuildTree, Phase::FindWords]
        );
    }
}

//! The core library for the grid-trace binary.
//!
//! Find every dictionary word that can be traced on a board of letters as a
//! path of adjacent, distinct cells. The dictionary is merged into a
//! [PatternTree] so that shared prefixes are searched once, then a
//! [BoardWalker] walks the tree and reuses the paths found for a node when
//! searching its children.

mod board;
mod error;
mod index;
mod measure;
mod path_cache;
mod pattern_tree;
mod prefilter;
mod reference;
mod solver;
mod walker;

pub use board::{Board, ALPHABET_LEN};
pub use error::{Error, Result};
pub use index::{CellIndex, NodeId};
pub use measure::{Measure, NoMeasure, Phase, Timings};
pub use path_cache::{CachedPath, Lineage, PathCache, PathCaches, PathState};
pub use pattern_tree::{PatternNode, PatternTree, Terminal};
pub use prefilter::{orientation, prepare, Candidate, LetterCounts, Orientation, PrepareOptions};
pub use reference::{find_words_naive, trace_word};
pub use solver::{find_words, find_words_measured, validate_words, SolverConfig};
pub use walker::{BoardWalker, Walk, WalkStats};

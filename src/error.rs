use snafu::Snafu;
use std::{
    fmt::{Debug, Display, Formatter},
    path::PathBuf,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("Could not open file {}: {}", path.display(), source))]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Could not read in file {}: {}", path.display(), source))]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("Invalid board in file {}: {}", path.display(), source))]
    BoardParse {
        path: PathBuf,
        source: grid_trace_core::Error,
    },
    #[snafu(display("Error while searching the words: {}", source))]
    Solve { source: grid_trace_core::Error },
    #[snafu(display(
        "The reference search disagrees: missing {:?}, unexpected {:?}",
        missing,
        unexpected
    ))]
    Verify {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

// Link Error to Display to print the message when an error is returned from main.
// (taken from snafu issues, may be implemented in snafu in the future)
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

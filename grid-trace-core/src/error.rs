use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("The board has no rows"))]
    EmptyBoard,
    #[snafu(display("Row {} of the board is empty", row))]
    EmptyRow { row: usize },
    #[snafu(display(
        "Row {} of the board has {} cells, expected {} like the first row",
        row,
        found,
        expected
    ))]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[snafu(display(
        "Invalid letter {:?} on the board at row {}, column {}: only a-z is supported",
        letter,
        row,
        col
    ))]
    InvalidCell { row: usize, col: usize, letter: char },
    #[snafu(display("Word number {} is empty", index))]
    EmptyWord { index: usize },
    #[snafu(display(
        "Word number {} ({:?}) contains characters outside of a-z",
        index,
        word
    ))]
    InvalidWord { index: usize, word: String },
}

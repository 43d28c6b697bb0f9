//! Error types for grid validation.

use derive_more::{Display, Error};
use tracing::instrument;

/// The first check a candidate grid failed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridDefect {
    /// Input text could not be parsed at all.
    #[display("input is not valid JSON: {}", _0)]
    Malformed(String),
    /// Input is not a sequence of rows.
    #[display("input is not a list of rows")]
    NotAGrid,
    /// Wrong number of rows.
    #[display("expected 3 rows, found {}", _0)]
    RowCount(usize),
    /// A row is not a sequence of cells.
    #[display("row {} is not a list of cells", _0)]
    RowNotASequence(usize),
    /// A row has the wrong number of cells.
    #[display("row {row} has {len} cells, expected 3")]
    RowLength {
        /// Row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// A cell holds a value outside the allowed alphabet.
    #[display("cell ({row}, {col}) holds {value}")]
    InvalidCell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Offending value, as written in the input.
        value: String,
    },
}

/// A candidate grid was rejected at verifier construction.
#[derive(Debug, Clone, Display, Error)]
#[display(
    "Invalid grid format. Must be {}x{} with only 'X', 'O', or '' ({})",
    size,
    size,
    defect
)]
pub struct InvalidGridError {
    /// Board size the caller configured.
    pub size: usize,
    /// Which check failed.
    pub defect: GridDefect,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidGridError {
    /// Creates a new grid error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize, defect: GridDefect) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            size,
            defect,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

//! Verifier: a validated board plus the queries run against it.

use super::config::VerifierConfig;
use super::error::{GridDefect, InvalidGridError};
use super::rules::{validate, win};
use super::types::{BOARD_SIZE, Board, Outcome, Player};
use derive_getters::Getters;
use serde_json::Value;
use tracing::instrument;

/// Judge for a single board snapshot.
///
/// Construction validates the grid; a `Verifier` therefore always holds a
/// well-formed board and its queries cannot fail. The board is never
/// modified after construction, so repeated queries agree.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Verifier {
    /// The validated board.
    board: Board,
    /// Board size the caller configured.
    size: usize,
}

impl Verifier {
    /// Builds a verifier from rows of cell symbols.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError`] unless the grid has exactly three rows of
    /// exactly three cells, each `"X"`, `"O"` or `""`. The bound is three
    /// whatever `size` says; `size` only appears in the error message.
    #[track_caller]
    #[instrument(skip(grid))]
    pub fn new<R, C>(grid: &[R], size: usize) -> Result<Self, InvalidGridError>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let board = validate::parse(grid, size)?;
        Ok(Self { board, size })
    }

    /// Builds a verifier with the default board size.
    #[track_caller]
    #[instrument(skip(grid))]
    pub fn with_default_size<R, C>(grid: &[R]) -> Result<Self, InvalidGridError>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        Self::new(grid, BOARD_SIZE)
    }

    /// Builds a verifier using the size from `config`.
    #[track_caller]
    #[instrument(skip(grid))]
    pub fn with_config<R, C>(grid: &[R], config: &VerifierConfig) -> Result<Self, InvalidGridError>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        Self::new(grid, *config.size())
    }

    /// Builds a verifier from a loosely-typed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError`] when the value is not an array of arrays
    /// of strings, or fails the shape and alphabet checks of [`Verifier::new`].
    #[track_caller]
    #[instrument(skip(value))]
    pub fn from_value(value: &Value, size: usize) -> Result<Self, InvalidGridError> {
        let board = validate::parse_value(value, size)?;
        Ok(Self { board, size })
    }

    /// Builds a verifier from JSON text such as
    /// `[["X","X","X"],["O","O",""],["","",""]]`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError`] when the text is not JSON or does not
    /// describe a valid grid.
    #[instrument(skip(text))]
    pub fn from_json(text: &str, size: usize) -> Result<Self, InvalidGridError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| InvalidGridError::new(size, GridDefect::Malformed(e.to_string())))?;
        Self::from_value(&value, size)
    }

    /// Returns the player with three in a row, if any.
    #[instrument(skip(self))]
    pub fn winner(&self) -> Option<Player> {
        win::detect_winner(&self.board)
    }

    /// Reports `X wins`, `O wins` or `Draw`.
    ///
    /// `Draw` is also reported for boards that still have empty cells.
    #[instrument(skip(self))]
    pub fn check_winner(&self) -> Outcome {
        win::check_winner(&self.board)
    }
}

impl std::str::FromStr for Verifier {
    type Err = InvalidGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s, BOARD_SIZE)
    }
}

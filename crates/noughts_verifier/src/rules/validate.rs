//! Grid validation.
//!
//! Checks run in a fixed order: the input must be a sequence of rows, hold
//! exactly three rows, every row must hold exactly three cells, and every
//! cell must be `"X"`, `"O"` or `""`. The row and cell bound is always
//! [`BOARD_SIZE`]; the `expected_size` argument is only carried into error
//! messages.

use super::super::error::{GridDefect, InvalidGridError};
use super::super::types::{BOARD_SIZE, Board, Cell};
use serde_json::Value;
use tracing::{instrument, warn};

/// Returns true if `grid` is a well-formed 3x3 board.
#[instrument(skip(grid))]
pub fn validate<R, C>(grid: &[R], expected_size: usize) -> bool
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    diagnose(grid).is_ok()
}

/// Returns true if `value` is a JSON array of three arrays of three
/// allowed strings.
#[instrument(skip(value))]
pub fn validate_value(value: &Value, expected_size: usize) -> bool {
    diagnose_value(value).is_ok()
}

/// Reports the first check `grid` fails.
#[instrument(skip(grid))]
pub fn diagnose<R, C>(grid: &[R]) -> Result<(), GridDefect>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    read_board(grid).map(|_| ())
}

/// Reports the first check `value` fails.
#[instrument(skip(value))]
pub fn diagnose_value(value: &Value) -> Result<(), GridDefect> {
    read_value_board(value).map(|_| ())
}

/// Validates `grid` and builds the board it describes.
#[track_caller]
#[instrument(skip(grid))]
pub(crate) fn parse<R, C>(grid: &[R], expected_size: usize) -> Result<Board, InvalidGridError>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    match read_board(grid) {
        Ok(board) => Ok(board),
        Err(defect) => Err(reject(expected_size, defect)),
    }
}

/// Validates a loosely-typed JSON grid and builds the board it describes.
#[track_caller]
#[instrument(skip(value))]
pub(crate) fn parse_value(value: &Value, expected_size: usize) -> Result<Board, InvalidGridError> {
    match read_value_board(value) {
        Ok(board) => Ok(board),
        Err(defect) => Err(reject(expected_size, defect)),
    }
}

#[track_caller]
fn reject(expected_size: usize, defect: GridDefect) -> InvalidGridError {
    let err = InvalidGridError::new(expected_size, defect);
    warn!(defect = %err.defect, expected_size, file = err.file, line = err.line, "Grid rejected");
    err
}

fn read_board<R, C>(grid: &[R]) -> Result<Board, GridDefect>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    if grid.len() != BOARD_SIZE {
        return Err(GridDefect::RowCount(grid.len()));
    }

    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row_idx, (row, out)) in grid.iter().zip(cells.iter_mut()).enumerate() {
        let row = row.as_ref();
        if row.len() != BOARD_SIZE {
            return Err(GridDefect::RowLength {
                row: row_idx,
                len: row.len(),
            });
        }
        for (col_idx, (symbol, slot)) in row.iter().zip(out.iter_mut()).enumerate() {
            let symbol = symbol.as_ref();
            *slot = Cell::from_symbol(symbol).ok_or_else(|| GridDefect::InvalidCell {
                row: row_idx,
                col: col_idx,
                value: format!("{:?}", symbol),
            })?;
        }
    }

    Ok(Board::from_cells(cells))
}

fn read_value_board(value: &Value) -> Result<Board, GridDefect> {
    let rows = value.as_array().ok_or(GridDefect::NotAGrid)?;
    if rows.len() != BOARD_SIZE {
        return Err(GridDefect::RowCount(rows.len()));
    }

    let mut grid: Vec<Vec<&str>> = Vec::with_capacity(BOARD_SIZE);
    for (row_idx, row) in rows.iter().enumerate() {
        let row = row
            .as_array()
            .ok_or(GridDefect::RowNotASequence(row_idx))?;
        if row.len() != BOARD_SIZE {
            return Err(GridDefect::RowLength {
                row: row_idx,
                len: row.len(),
            });
        }
        let symbols = row
            .iter()
            .enumerate()
            .map(|(col_idx, cell)| {
                cell.as_str().ok_or_else(|| GridDefect::InvalidCell {
                    row: row_idx,
                    col: col_idx,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.push(symbols);
    }

    read_board(&grid)
}

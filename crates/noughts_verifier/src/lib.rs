//! Noughts Verifier - stateless judge for noughts-and-crosses boards
//!
//! Takes a snapshot of a 3x3 board, checks that it is well formed, and
//! reports whether `X` or `O` has three in a row. Turn order, move legality
//! and game flow belong to the caller.
//!
//! # Architecture
//!
//! - **Rules**: grid validation and win detection as pure functions
//! - **Verifier**: validated board with the outcome query
//! - **Config**: TOML-loadable settings for construction
//!
//! # Example
//!
//! ```
//! use noughts_verifier::{Outcome, Player, Verifier};
//!
//! # fn example() -> Result<(), noughts_verifier::InvalidGridError> {
//! let grid = [["X", "X", "X"], ["O", "O", ""], ["", "", ""]];
//! let verifier = Verifier::with_default_size(&grid)?;
//! assert_eq!(verifier.check_winner(), Outcome::Won(Player::X));
//! assert_eq!(verifier.check_winner().to_string(), "X wins");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod types;
mod verifier;

pub mod rules;

pub use config::{ConfigError, VerifierConfig};
pub use error::{GridDefect, InvalidGridError};
pub use rules::Line;
pub use types::{BOARD_SIZE, Board, Cell, Outcome, Player};
pub use verifier::Verifier;

//! Board rules.
//!
//! Pure functions for checking that a candidate grid is well formed and for
//! judging a validated board. Rules are kept apart from the verifier so they
//! can be called on their own.

pub mod validate;
pub mod win;

pub use validate::{diagnose, diagnose_value, validate, validate_value};
pub use win::{Line, check_winner, detect_winner, winning_line};

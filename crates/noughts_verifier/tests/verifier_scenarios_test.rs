//! Tests for verifier construction and outcome labels on fixed boards.

use noughts_verifier::{GridDefect, Outcome, Player, Verifier, VerifierConfig};
use serde_json::json;

fn outcome(grid: &[Vec<&str>]) -> String {
    Verifier::with_default_size(grid)
        .expect("grid should be valid")
        .check_winner()
        .to_string()
}

#[test]
fn test_short_last_row_rejected() {
    let grid = vec![vec!["X", "X", "X"], vec!["O", "O", ""], vec!["", ""]];
    let err = Verifier::with_default_size(&grid).expect_err("row 3 has two cells");
    assert_eq!(err.defect, GridDefect::RowLength { row: 2, len: 2 });
    assert!(
        err.to_string()
            .starts_with("Invalid grid format. Must be 3x3 with only 'X', 'O', or ''")
    );
}

#[test]
fn test_x_wins_top_row() {
    let grid = vec![vec!["X", "X", "X"], vec!["O", "O", ""], vec!["", "", ""]];
    assert_eq!(outcome(&grid), "X wins");
}

#[test]
fn test_o_wins_middle_row() {
    let grid = vec![vec!["O", "X", "X"], vec!["O", "O", "O"], vec!["X", "", ""]];
    assert_eq!(outcome(&grid), "O wins");
}

#[test]
fn test_x_wins_diagonal() {
    let grid = vec![vec!["X", "O", "O"], vec!["O", "X", "O"], vec!["", "", "X"]];
    assert_eq!(outcome(&grid), "X wins");
}

#[test]
fn test_full_board_draw() {
    let grid = vec![vec!["X", "O", "X"], vec!["X", "X", "O"], vec!["O", "X", "O"]];
    assert_eq!(outcome(&grid), "Draw");
}

#[test]
fn test_short_first_row_rejected() {
    let grid = vec![vec!["X", "O"], vec!["X", "X", "O"], vec!["O", "X", "O"]];
    let err = Verifier::with_default_size(&grid).expect_err("row 1 has two cells");
    assert_eq!(err.defect, GridDefect::RowLength { row: 0, len: 2 });
}

#[test]
fn test_unfinished_board_reports_draw() {
    let grid = vec![vec!["X", "", ""], vec!["", "O", ""], vec!["", "", ""]];
    assert_eq!(outcome(&grid), "Draw");
}

#[test]
fn test_empty_board_reports_draw() {
    let grid = vec![vec![""; 3]; 3];
    assert_eq!(outcome(&grid), "Draw");
}

#[test]
fn test_owned_strings_accepted() {
    let grid: Vec<Vec<String>> = vec![
        vec!["O".into(), "".into(), "X".into()],
        vec!["".into(), "O".into(), "X".into()],
        vec!["".into(), "".into(), "X".into()],
    ];
    let verifier = Verifier::new(&grid, 3).expect("valid grid");
    assert_eq!(verifier.check_winner(), Outcome::Won(Player::X));
}

#[test]
fn test_foreign_symbols_rejected() {
    for bad in ["x", "o", "0", " ", "XO", "-"] {
        let grid = vec![vec!["X", "O", ""], vec!["", bad, ""], vec!["", "", ""]];
        let err = Verifier::with_default_size(&grid).expect_err("symbol outside alphabet");
        assert!(matches!(err.defect, GridDefect::InvalidCell { row: 1, col: 1, .. }));
    }
}

#[test]
fn test_wrong_row_counts_rejected() {
    let empty: Vec<Vec<&str>> = Vec::new();
    assert!(Verifier::with_default_size(&empty).is_err());

    let four = vec![vec![""; 3]; 4];
    let err = Verifier::with_default_size(&four).expect_err("four rows");
    assert_eq!(err.defect, GridDefect::RowCount(4));
}

#[test]
fn test_json_shapes_rejected() {
    for value in [
        json!(3),
        json!("X"),
        json!(null),
        json!({"board": [["X", "X", "X"]]}),
        json!(["XXX", "OO ", "   "]),
        json!([["X", "X", true], ["", "", ""], ["", "", ""]]),
    ] {
        assert!(Verifier::from_value(&value, 3).is_err(), "{value} should be rejected");
    }
}

#[test]
fn test_json_text_accepted() {
    let verifier = Verifier::from_json(r#"[["O","X","X"],["O","O","O"],["X","",""]]"#, 3)
        .expect("valid grid");
    assert_eq!(verifier.check_winner().to_string(), "O wins");
}

#[test]
fn test_configured_size_is_legacy_only() {
    // A 4x4 grid is rejected even when size 4 is configured.
    let grid = vec![vec![""; 4]; 4];
    let err = Verifier::with_config(&grid, &VerifierConfig::new(4)).expect_err("bound stays 3");
    assert_eq!(err.size, 4);
    assert!(err.to_string().contains("Must be 4x4"));
}

#[test]
fn test_repeated_queries_agree() {
    let grid = vec![vec!["X", "O", "O"], vec!["O", "X", "O"], vec!["", "", "X"]];
    let verifier = Verifier::with_default_size(&grid).expect("valid grid");
    let first = verifier.check_winner();
    for _ in 0..5 {
        assert_eq!(verifier.check_winner(), first);
    }
    assert_eq!(verifier.board().occupied(), 7);
}

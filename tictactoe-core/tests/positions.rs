//! Hand-checked positions
//!
//! Loads positions from `tests/fixtures/positions.json` and verifies:
//! - Classification
//! - Forward neighbor count (legal boards)
//! - Backward neighbor count (legal boards)

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tictactoe_core::{backward_neighbors, classify, forward_neighbors, Board, Classification};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TestData {
    version: String,
    positions: Vec<Position>,
}

#[derive(Debug, Deserialize)]
struct Position {
    board: String,
    classification: Classification,
    #[serde(default)]
    forward: Option<usize>,
    #[serde(default)]
    backward: Option<usize>,
    description: String,
}

/// Load test positions from JSON file
fn load_test_positions(path: &Path) -> TestData {
    let file = File::open(path).expect("Failed to open test positions file");
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).expect("Failed to parse JSON")
}

fn fixture_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/positions.json")
}

#[test]
fn test_fixture_positions() {
    let data = load_test_positions(&fixture_path());
    assert!(!data.positions.is_empty());

    let mut failures: Vec<String> = Vec::new();

    for pos in &data.positions {
        let board: Board = match pos.board.parse() {
            Ok(b) => b,
            Err(e) => {
                failures.push(format!("{}: {}", pos.description, e));
                continue;
            }
        };
        let mut errors: Vec<String> = Vec::new();

        let actual = classify(board);
        if actual != pos.classification {
            errors.push(format!(
                "classification: expected={}, actual={}",
                pos.classification, actual
            ));
        }

        if let Some(expected) = pos.forward {
            match forward_neighbors(board) {
                Ok(next) if next.len() == expected => {}
                Ok(next) => errors.push(format!("forward: expected={}, actual={}", expected, next.len())),
                Err(e) => errors.push(format!("forward: {}", e)),
            }
        }

        if let Some(expected) = pos.backward {
            match backward_neighbors(board) {
                Ok(prev) if prev.len() == expected => {}
                Ok(prev) => errors.push(format!("backward: expected={}, actual={}", expected, prev.len())),
                Err(e) => errors.push(format!("backward: {}", e)),
            }
        }

        if !pos.classification.is_legal() && forward_neighbors(board).is_ok() {
            errors.push("forward: illegal board accepted".to_string());
        }

        if !errors.is_empty() {
            failures.push(format!(
                "{} ({} = {}):\n  {}",
                pos.description,
                pos.board,
                board.to_u32(),
                errors.join("\n  ")
            ));
        }
    }

    for f in &failures {
        println!("\n{}", f);
    }
    assert!(failures.is_empty(), "{} fixture positions failed", failures.len());
}

#[test]
fn test_fixture_covers_every_classification() {
    let data = load_test_positions(&fixture_path());
    for c in Classification::ALL {
        assert!(
            data.positions.iter().any(|p| p.classification == c),
            "no fixture position for {}",
            c
        );
    }
}

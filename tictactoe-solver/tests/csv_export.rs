//! CSV export of the full table.

use std::fs;

use tictactoe_solver::{export, Solver};

#[test]
fn test_export_file() {
    let table = Solver::new().solve_all();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.csv");

    let written = export::write_csv(&table, fs::File::create(&path).unwrap()).unwrap();
    assert_eq!(written, 5478);

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.ends_with('\n'));
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 5478);
    assert_eq!(lines[0], "bbbbbbbbb,d");
    assert_eq!(lines[1], "obbbbbbbb,d");
    assert_eq!(lines[9], "bbbbbbbbo,d");

    let mut last_marks = 0;
    for line in &lines {
        assert_eq!(line.len(), 11, "{line}");
        let (cells, result) = line.split_at(9);
        assert!(cells.chars().all(|c| matches!(c, 'o' | 'x' | 'b')), "{line}");
        assert!(matches!(result, ",o" | ",x" | ",d"), "{line}");
        let marks = cells.chars().filter(|&c| c != 'b').count();
        assert!(marks >= last_marks, "{line} out of order");
        last_marks = marks;
    }
    assert_eq!(last_marks, 9);
}

#[test]
fn test_export_matches_record_format() {
    let table = Solver::new().solve_all();
    let mut out = Vec::new();
    export::write_csv(&table, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected: Vec<String> = export::export_order(&table)
        .into_iter()
        .map(|(board, outcome)| export::record(board, outcome))
        .collect();
    assert_eq!(text, expected.join("\n"));
}

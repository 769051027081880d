//! Property-based tests for mazecut
//!
//! This module uses proptest to verify the invariants of line decimation
//! over randomly generated maze-like files.

use std::fs;
use tempfile::TempDir;

use mazecut::{Config, decimate_content, decimate_file, decimate_line};

use proptest::prelude::*;

// ============================================================================
// Property 1: Line structure
// ============================================================================

proptest! {
    /// Every input line yields exactly one output line, in order
    #[test]
    fn prop_line_count_preserved(
        rows in prop::collection::vec("[#. ]{0,40}", 0..30)
    ) {
        let content: String = rows.iter().map(|r| format!("{}\n", r)).collect();
        let output = decimate_content(&content);

        prop_assert_eq!(output.matches('\n').count(), rows.len());

        for (row, out) in rows.iter().zip(output.lines()) {
            let expected = decimate_line(&format!("{}\n", row));
            prop_assert_eq!(format!("{}\n", out), expected);
        }
    }

    /// Output line holds ceil(n / 2) characters of an n-character row
    #[test]
    fn prop_row_length_halved(row in "[#. ]{0,80}") {
        let out = decimate_line(&format!("{}\n", row));
        let kept = out.trim_end_matches('\n').chars().count();
        prop_assert_eq!(kept, row.chars().count().div_ceil(2));
    }

    /// Kept characters are exactly the even-indexed ones
    #[test]
    fn prop_keeps_even_indices(row in "[a-z#.]{0,60}") {
        let out = decimate_line(&format!("{}\n", row));
        let expected: String = row.chars().step_by(2).collect();
        prop_assert_eq!(out, format!("{}\n", expected));
    }
}

// ============================================================================
// Property 2: In-place rewrite
// ============================================================================

proptest! {
    /// Rewriting the file gives the same bytes as the pure transform
    #[test]
    fn prop_file_matches_content_transform(
        rows in prop::collection::vec("[#.]{0,30}", 1..20)
    ) {
        let content: String = rows.iter().map(|r| format!("{}\n", r)).collect();

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("maze.txt");
        fs::write(&file_path, &content).unwrap();

        let report = decimate_file(&Config::new(&file_path)).unwrap();
        let on_disk = fs::read_to_string(&file_path).unwrap();

        prop_assert_eq!(&on_disk, &decimate_content(&content));
        prop_assert_eq!(report.lines, rows.len());
        prop_assert_eq!(report.bytes_after, on_disk.len() as u64);
        prop_assert!(report.bytes_after <= report.bytes_before);
    }

    /// A second pass shortens every row of two or more characters again
    #[test]
    fn prop_second_pass_shrinks_further(
        rows in prop::collection::vec("[#.]{4,30}", 1..10)
    ) {
        let content: String = rows.iter().map(|r| format!("{}\n", r)).collect();

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("maze.txt");
        fs::write(&file_path, &content).unwrap();
        let config = Config::new(&file_path);

        decimate_file(&config).unwrap();
        let once = fs::read_to_string(&file_path).unwrap();
        decimate_file(&config).unwrap();
        let twice = fs::read_to_string(&file_path).unwrap();

        prop_assert_ne!(&once, &twice);
        for (a, b) in once.lines().zip(twice.lines()) {
            prop_assert_eq!(b.len(), a.len().div_ceil(2));
            prop_assert!(b.len() < a.len());
        }
    }
}

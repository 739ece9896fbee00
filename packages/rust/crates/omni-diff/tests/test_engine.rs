//! Tests for engine module - compute_line_diff and LineDiffEngine.

use omni_diff::{
    DiffConfig, DiffError, DiffKind, DiffRange, DiffStats, LineDiffEngine, compute_line_diff,
};

#[test]
fn test_identity() {
    for doc in ["", "a", "a\nb\nc", "a\r\nb\r\n", "\n\n"] {
        assert!(compute_line_diff(doc, doc).is_empty(), "doc={doc:?}");
    }
}

#[test]
fn test_line_ending_style_is_not_a_change() {
    assert!(compute_line_diff("a\nb\nc\n", "a\r\nb\r\nc\r\n").is_empty());
    assert!(compute_line_diff("a\rb", "a\nb").is_empty());
}

#[test]
fn test_mixed_line_endings_split_uniformly() {
    assert!(compute_line_diff("a\r\nb\nc", "a\nb\rc").is_empty());
}

#[test]
fn test_trailing_newline_is_an_added_line() {
    assert_eq!(
        compute_line_diff("a", "a\n"),
        vec![DiffRange::new(DiffKind::Add, 2, 2)]
    );
}

#[test]
fn test_empty_to_content_is_modify() {
    // "" is one empty line, so it is replaced rather than appended to.
    assert_eq!(
        compute_line_diff("", "hello"),
        vec![DiffRange::new(DiffKind::Modify, 1, 1)]
    );
}

#[test]
fn test_content_to_empty() {
    assert_eq!(
        compute_line_diff("a\nb", ""),
        vec![DiffRange::new(DiffKind::Modify, 1, 1)]
    );
}

#[test]
fn test_whitespace_is_significant() {
    assert_eq!(
        compute_line_diff("a\nb", "a\nb "),
        vec![DiffRange::new(DiffKind::Modify, 2, 2)]
    );
}

#[test]
fn test_engine_stats() {
    let result = LineDiffEngine::default()
        .compute("a\nb\nc\nd", "a\nB\nc\nd\ne")
        .expect("Should diff");

    assert_eq!(
        result.stats,
        DiffStats {
            additions: 2,
            deletions: 1,
            edit_distance: 3,
        }
    );
    assert_eq!(result.original_lines, 4);
    assert_eq!(result.modified_lines, 5);
    assert!(result.has_changes());
}

#[test]
fn test_too_large_rejected() {
    let engine = LineDiffEngine::new(DiffConfig {
        max_lines: 3,
        ..Default::default()
    });

    let err = engine
        .compute("a\nb", "a\nb\nc\nd")
        .expect_err("Should reject");

    assert_eq!(err, DiffError::TooLarge { lines: 4, limit: 3 });
    assert_eq!(err.to_string(), "Input too large: 4 lines exceeds limit of 3");
}

#[test]
fn test_at_limit_accepted() {
    let engine = LineDiffEngine::new(DiffConfig {
        max_lines: 3,
        ..Default::default()
    });
    assert!(engine.compute("a\nb\nc", "a\nx\nc").is_ok());
}

#[test]
fn test_edit_distance_limit() {
    let engine = LineDiffEngine::new(DiffConfig {
        max_edit_distance: Some(2),
        ..Default::default()
    });

    // One replaced line: distance 2.
    let ok = engine.compute("a\nb\nc", "a\nx\nc").expect("Within limit");
    assert_eq!(ok.stats.edit_distance, 2);

    // Two replaced lines: distance 4.
    let err = engine
        .compute("a\nb\nc", "x\nb\ny")
        .expect_err("Should exceed limit");
    assert_eq!(err, DiffError::TooManyEdits { limit: 2 });
}

#[test]
fn test_engine_default_config() {
    let engine = LineDiffEngine::default();
    assert_eq!(engine.config().max_lines, 200_000);
    assert_eq!(engine.config().max_edit_distance, None);
    assert_eq!(engine.config().workers, 0);
}

#[test]
fn test_range_json_shape() {
    let ranges = compute_line_diff("a\nb\nc", "a\nB\nc");
    let json = serde_json::to_string(&ranges).expect("Serialize");
    assert_eq!(json, r#"[{"kind":"modify","startLine":2,"endLine":2}]"#);

    let back: Vec<DiffRange> = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(back, ranges);
}

#[test]
fn test_result_json_shape() {
    let result = LineDiffEngine::default()
        .compute("a", "a\nb")
        .expect("Should diff");
    let value = serde_json::to_value(&result).expect("Serialize");

    assert_eq!(value["ranges"][0]["kind"], "add");
    assert_eq!(value["stats"]["editDistance"], 1);
    assert_eq!(value["originalLines"], 1);
    assert_eq!(value["modifiedLines"], 2);
}

#[test]
fn test_format_result() {
    let result = LineDiffEngine::default()
        .compute("a\nb\nc\nd", "a\nX\nY\nc\nd\ne")
        .expect("Should diff");

    let formatted = LineDiffEngine::format_result(&result, Some("notes.md"));

    assert!(formatted.contains("// DIFF: notes.md"));
    assert!(formatted.contains("// Lines: 4 -> 6"));
    assert!(formatted.contains("// Changes: +3 -1"));
    assert!(formatted.contains("L2-L3 modify"));
    assert!(formatted.contains("L6 add"));
}

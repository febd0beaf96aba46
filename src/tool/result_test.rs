// ABOUTME: Tests for ToolResult construction.
// ABOUTME: Verifies the error flag is set by the right constructor.

use super::*;

#[test]
fn test_text_result() {
    let result = ToolResult::text("all good");
    assert_eq!(result.content, "all good");
    assert!(!result.is_error);
}

#[test]
fn test_error_result() {
    let result = ToolResult::error("something broke");
    assert_eq!(result.content, "something broke");
    assert!(result.is_error);
}

#[test]
fn test_default_is_empty_success() {
    let result = ToolResult::default();
    assert!(result.content.is_empty());
    assert!(!result.is_error);
}

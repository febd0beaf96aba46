// ABOUTME: Tests for conversation types - message construction, text
// ABOUTME: extraction, and tool-use detection.

use super::*;

#[test]
fn test_message_constructors() {
    let user = Message::user("Hello");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.text(), "Hello");

    let assistant = Message::assistant("Hi there!");
    assert_eq!(assistant.role, Role::Assistant);
}

#[test]
fn test_tool_results_message_preserves_order() {
    let msg = Message::tool_results(vec![
        ContentBlock::tool_result("tu_1", "first"),
        ContentBlock::tool_error("tu_2", "second failed"),
    ]);

    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content.len(), 2);
    match &msg.content[0] {
        ContentBlock::ToolResult {
            tool_use_id,
            is_error,
            ..
        } => {
            assert_eq!(tool_use_id, "tu_1");
            assert!(!is_error);
        }
        other => panic!("unexpected block: {other:?}"),
    }
    match &msg.content[1] {
        ContentBlock::ToolResult {
            tool_use_id,
            is_error,
            ..
        } => {
            assert_eq!(tool_use_id, "tu_2");
            assert!(is_error);
        }
        other => panic!("unexpected block: {other:?}"),
    }
}

#[test]
fn test_message_text_skips_tool_blocks() {
    let msg = Message {
        role: Role::Assistant,
        content: vec![
            ContentBlock::text("part one"),
            ContentBlock::ToolUse {
                id: "tu_1".into(),
                name: "bash".into(),
                input: serde_json::json!({"command": "ls"}),
            },
            ContentBlock::text(" part two"),
        ],
    };

    assert_eq!(msg.text(), "part one part two");
}

#[test]
fn test_response_has_tool_use() {
    let response = Response {
        id: "msg_1".into(),
        content: vec![ContentBlock::ToolUse {
            id: "tu_1".into(),
            name: "skill".into(),
            input: serde_json::json!({}),
        }],
        stop_reason: StopReason::ToolUse,
        model: "test".into(),
        usage: Usage::default(),
    };
    assert!(response.has_tool_use());

    let response = Response {
        id: "msg_2".into(),
        content: vec![ContentBlock::text("done")],
        stop_reason: StopReason::EndTurn,
        model: "test".into(),
        usage: Usage::default(),
    };
    assert!(!response.has_tool_use());
}

#[test]
fn test_usage_absorb() {
    let mut total = Usage {
        input_tokens: 10,
        output_tokens: 5,
    };
    total.absorb(&Usage {
        input_tokens: 7,
        output_tokens: 3,
    });

    assert_eq!(total.input_tokens, 17);
    assert_eq!(total.output_tokens, 8);
}

#[test]
fn test_request_builder() {
    let request = Request::new("test-model")
        .message(Message::user("Hello"))
        .system("You are helpful")
        .max_tokens(1024);

    assert_eq!(request.model, "test-model");
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.system, Some("You are helpful".to_string()));
    assert_eq!(request.max_tokens, Some(1024));
}

#[test]
fn test_content_block_serde_tagging() {
    let block = ContentBlock::tool_result("tu_9", "ok");
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["type"], "tool_result");
    assert_eq!(json["tool_use_id"], "tu_9");

    let parsed: ContentBlock =
        serde_json::from_str(r#"{"type": "text", "text": "hi"}"#).unwrap();
    assert!(matches!(parsed, ContentBlock::Text { .. }));
}

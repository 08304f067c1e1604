use stackpass_client::streaming::{decode_sse_line, ChatStreamChunk, SseLine};
use stackpass_client::StreamEvent;

#[test]
fn test_data_frame_with_content() {
    let line = r#"data: {"choices":[{"delta":{"content":"A"}}]}"#;

    match decode_sse_line(line).unwrap() {
        SseLine::Chunk(chunk) => assert_eq!(chunk.content(), Some("A")),
        other => panic!("Expected Chunk, got {:?}", other),
    }
}

#[test]
fn test_done_sentinel() {
    match decode_sse_line("data: [DONE]").unwrap() {
        SseLine::Done => {}
        other => panic!("Expected Done, got {:?}", other),
    }
}

#[test]
fn test_done_sentinel_with_surrounding_whitespace() {
    match decode_sse_line("data:  [DONE] ").unwrap() {
        SseLine::Done => {}
        other => panic!("Expected Done, got {:?}", other),
    }
}

#[test]
fn test_blank_line_skipped() {
    match decode_sse_line("").unwrap() {
        SseLine::Skip => {}
        other => panic!("Expected Skip, got {:?}", other),
    }
}

#[test]
fn test_comment_line_skipped() {
    match decode_sse_line(": keep-alive").unwrap() {
        SseLine::Skip => {}
        other => panic!("Expected Skip, got {:?}", other),
    }
}

#[test]
fn test_other_sse_field_skipped() {
    match decode_sse_line("event: ping").unwrap() {
        SseLine::Skip => {}
        other => panic!("Expected Skip, got {:?}", other),
    }
}

#[test]
fn test_role_announcement_has_no_content() {
    let line = r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#;

    match decode_sse_line(line).unwrap() {
        SseLine::Chunk(chunk) => assert_eq!(chunk.content(), None),
        other => panic!("Expected Chunk, got {:?}", other),
    }
}

#[test]
fn test_finish_reason_frame_has_no_content() {
    let line = r#"data: {"choices":[{"delta":{},"finish_reason":"stop"}]}"#;

    match decode_sse_line(line).unwrap() {
        SseLine::Chunk(chunk) => assert_eq!(chunk.content(), None),
        other => panic!("Expected Chunk, got {:?}", other),
    }
}

#[test]
fn test_malformed_data_frame_is_an_error() {
    let result = decode_sse_line("data: {not json");
    assert!(result.is_err());
}

#[test]
fn test_fragments_assemble_in_order() {
    let lines = [
        r#"data: {"choices":[{"delta":{"role":"assistant"}}]}"#,
        r#"data: {"choices":[{"delta":{"content":"A"}}]}"#,
        "",
        r#"data: {"choices":[{"delta":{"content":"B"}}]}"#,
        "data: [DONE]",
        r#"data: {"choices":[{"delta":{"content":"never read"}}]}"#,
    ];

    let mut assembled = String::new();
    for line in lines {
        match decode_sse_line(line).unwrap() {
            SseLine::Skip => {}
            SseLine::Done => break,
            SseLine::Chunk(chunk) => {
                if let Some(content) = chunk.content() {
                    assembled.push_str(content);
                }
            }
        }
    }

    assert_eq!(assembled, "AB");
}

#[test]
fn test_chunk_wire_shape() {
    let chunk: ChatStreamChunk =
        serde_json::from_str(r#"{"choices":[{"delta":{"content":"hi"}}]}"#).unwrap();
    assert_eq!(chunk.content(), Some("hi"));
}

#[test]
fn test_stream_event_serialization() {
    let event = StreamEvent::Message {
        content: "Test".to_string(),
    };

    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"message\""));
    assert!(json.contains("Test"));
}

#[test]
fn test_stream_event_deserialization() {
    let json = r#"{"type":"message","content":"Hello"}"#;
    let event: StreamEvent = serde_json::from_str(json).unwrap();

    match event {
        StreamEvent::Message { content } => assert_eq!(content, "Hello"),
        _ => panic!("Expected Message variant"),
    }
}

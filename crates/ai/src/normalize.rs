//! Reduce heterogeneous provider payloads to the fields the service returns.
//!
//! Each extractor tries the known shapes in order and returns the first
//! non-empty string.

use serde_json::Value;

/// JSON pointers tried for a chat reply.
const REPLY_POINTERS: &[&str] = &[
    "/choices/0/message/content",
    "/output_text",
    "/content/0/text",
    "/message/content",
    "/reply",
];

/// JSON pointers tried for a transcript.
const TRANSCRIPT_POINTERS: &[&str] = &["/text", "/transcript", "/results/0/transcript"];

/// JSON pointers tried for an avatar session token.
const AVATAR_TOKEN_POINTERS: &[&str] = &["/data/token", "/token", "/data/access_token"];

/// JSON pointers tried for an upstream error message.
const ERROR_POINTERS: &[&str] = &["/error/message", "/error", "/message", "/detail"];

fn first_string(value: &Value, pointers: &[&str]) -> Option<String> {
    pointers.iter().find_map(|p| {
        value
            .pointer(p)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

pub fn extract_reply(value: &Value) -> Option<String> {
    first_string(value, REPLY_POINTERS)
}

pub fn extract_transcript(value: &Value) -> Option<String> {
    first_string(value, TRANSCRIPT_POINTERS)
}

pub fn extract_avatar_token(value: &Value) -> Option<String> {
    first_string(value, AVATAR_TOKEN_POINTERS)
}

/// The most specific error message in an upstream error body.
///
/// Falls back to the raw body (or a placeholder when it is empty).
pub fn upstream_error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| first_string(&v, ERROR_POINTERS));
    match parsed {
        Some(message) => message,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn reply_from_chat_completions() {
        let v = json!({"choices": [{"message": {"role": "assistant", "content": " Hello "}}]});
        assert_eq!(extract_reply(&v).as_deref(), Some("Hello"));
    }

    #[test]
    fn reply_from_alternative_shapes() {
        assert_eq!(extract_reply(&json!({"output_text": "a"})).as_deref(), Some("a"));
        assert_eq!(
            extract_reply(&json!({"content": [{"type": "text", "text": "b"}]})).as_deref(),
            Some("b")
        );
        assert_eq!(extract_reply(&json!({"message": {"content": "c"}})).as_deref(), Some("c"));
        assert_eq!(extract_reply(&json!({"reply": "d"})).as_deref(), Some("d"));
    }

    #[test]
    fn empty_reply_falls_through_to_next_shape() {
        let v = json!({"choices": [{"message": {"content": ""}}], "reply": "fallback"});
        assert_eq!(extract_reply(&v).as_deref(), Some("fallback"));
    }

    #[test]
    fn reply_missing() {
        assert_eq!(extract_reply(&json!({"choices": []})), None);
        assert_eq!(extract_reply(&json!({"choices": [{"message": {"content": null}}]})), None);
    }

    #[test]
    fn transcript_shapes() {
        assert_eq!(extract_transcript(&json!({"text": "hi"})).as_deref(), Some("hi"));
        assert_eq!(extract_transcript(&json!({"transcript": "yo"})).as_deref(), Some("yo"));
        assert_eq!(
            extract_transcript(&json!({"results": [{"transcript": "hey"}]})).as_deref(),
            Some("hey")
        );
        assert_eq!(extract_transcript(&json!({})), None);
    }

    #[test]
    fn avatar_token_shapes() {
        assert_eq!(extract_avatar_token(&json!({"data": {"token": "t1"}})).as_deref(), Some("t1"));
        assert_eq!(extract_avatar_token(&json!({"token": "t2"})).as_deref(), Some("t2"));
        assert_eq!(
            extract_avatar_token(&json!({"data": {"access_token": "t3"}})).as_deref(),
            Some("t3")
        );
        assert_eq!(extract_avatar_token(&json!({"data": null})), None);
    }

    #[test]
    fn error_message_shapes() {
        assert_eq!(
            upstream_error_message(r#"{"error": {"message": "quota exceeded"}}"#),
            "quota exceeded"
        );
        assert_eq!(upstream_error_message(r#"{"error": "bad key"}"#), "bad key");
        assert_eq!(upstream_error_message(r#"{"message": "nope"}"#), "nope");
        assert_eq!(upstream_error_message("Gateway Timeout"), "Gateway Timeout");
        assert_eq!(upstream_error_message("  "), "empty response body");
    }

    #[test]
    fn unrecognized_json_error_body_is_returned_raw() {
        assert_eq!(upstream_error_message(r#"{"code": 7}"#), r#"{"code": 7}"#);
    }
}

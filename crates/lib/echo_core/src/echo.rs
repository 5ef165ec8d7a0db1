//! Echo response formatting.

use chrono::{DateTime, Utc};

use crate::models::{Context, McpRequest, McpResponse};

/// Placeholder used when a request carries no context blocks.
pub const NO_CONTEXT: &str = "No context provided";

/// RFC 1123 layout, e.g. `Mon, 02 Jan 2006 15:04:05 UTC`.
pub const TIMESTAMP_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Builds the echo reply for `request` as seen at `now`.
///
/// The reply quotes the last message and dumps the context blocks as
/// pretty-printed JSON. Nothing in the request is interpreted.
pub fn respond(request: &McpRequest, now: DateTime<Utc>) -> serde_json::Result<McpResponse> {
    let context = describe_context(&request.context)?;
    Ok(McpResponse::assistant(format!(
        "Echo from MCP server at {}\n\nYou said: {}\n\nContext received: {}",
        now.format(TIMESTAMP_FORMAT),
        request.last_message(),
        context,
    )))
}

/// Pretty JSON of the blocks, or [`NO_CONTEXT`] when there are none.
pub fn describe_context(context: &[Context]) -> serde_json::Result<String> {
    if context.is_empty() {
        return Ok(NO_CONTEXT.to_string());
    }
    serde_json::to_string_pretty(context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap()
    }

    #[test]
    fn formats_full_reply() {
        let req = McpRequest {
            messages: vec![Message::new("user", "hi")],
            ..Default::default()
        };
        let resp = respond(&req, fixed_now()).expect("respond");
        assert_eq!(resp.role, "assistant");
        assert_eq!(
            resp.content,
            "Echo from MCP server at Mon, 02 Jan 2006 15:04:05 UTC\n\n\
             You said: hi\n\n\
             Context received: No context provided"
        );
    }

    #[test]
    fn quotes_only_the_last_message() {
        let req = McpRequest {
            messages: vec![
                Message::new("user", "first"),
                Message::new("assistant", "second"),
                Message::new("user", "third  with\ttabs"),
            ],
            ..Default::default()
        };
        let resp = respond(&req, fixed_now()).expect("respond");
        assert!(resp.content.contains("You said: third  with\ttabs\n"));
        assert!(!resp.content.contains("first"));
        assert!(!resp.content.contains("second"));
    }

    #[test]
    fn no_messages_quotes_empty_string() {
        let resp = respond(&McpRequest::default(), fixed_now()).expect("respond");
        assert!(resp.content.contains("You said: \n\n"));
        assert!(resp.content.ends_with(NO_CONTEXT));
    }

    #[test]
    fn context_is_pretty_printed() {
        let req: McpRequest = serde_json::from_value(json!({
            "messages": [{"role": "user", "content": "look"}],
            "context": [{"type": "file", "content": {"z": 1, "a": "b"}, "id": "c1"}]
        }))
        .expect("decode");

        let resp = respond(&req, fixed_now()).expect("respond");
        let expected = "[\n  {\n    \"type\": \"file\",\n    \"content\": {\n      \"a\": \"b\",\n      \"z\": 1\n    },\n    \"id\": \"c1\"\n  }\n]";
        assert!(
            resp.content.ends_with(&format!("Context received: {expected}")),
            "unexpected content: {}",
            resp.content
        );
        assert!(!resp.content.contains(NO_CONTEXT));
    }

    #[test]
    fn context_without_content_or_id_dumps_null_and_drops_id() {
        let req: McpRequest = serde_json::from_value(json!({
            "context": [{"type": "note", "id": ""}]
        }))
        .expect("decode");
        let described = describe_context(&req.context).expect("describe");
        assert_eq!(
            described,
            "[\n  {\n    \"type\": \"note\",\n    \"content\": null\n  }\n]"
        );
    }

    #[test]
    fn describe_context_matches_serde_pretty() {
        let ctx = vec![
            Context {
                kind: "a".into(),
                ..Default::default()
            },
            Context {
                kind: "b".into(),
                id: Some("2".into()),
                ..Default::default()
            },
        ];
        let described = describe_context(&ctx).expect("describe");
        assert_eq!(described, serde_json::to_string_pretty(&ctx).unwrap());
        assert_eq!(describe_context(&[]).expect("describe"), NO_CONTEXT);
    }

    #[test]
    fn timestamp_uses_rfc1123_layout() {
        let ts = Utc.with_ymd_and_hms(2024, 11, 9, 7, 3, 0).unwrap();
        assert_eq!(
            ts.format(TIMESTAMP_FORMAT).to_string(),
            "Sat, 09 Nov 2024 07:03:00 UTC"
        );
    }
}

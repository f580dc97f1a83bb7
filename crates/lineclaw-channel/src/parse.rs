//! Inbound event normalization
//!
//! Projects a raw webhook event onto [`InboundMessage`]. Postback data wins
//! over message text when an event carries both.

use lineclaw_types::{Channel, InboundMessage, WebhookBody, WebhookEvent};
use serde_json::Value;
use tracing::debug;

/// Normalize one raw event, or `None` if it has no type or source
pub fn parse_event(raw: &Value) -> Option<InboundMessage> {
    let event: WebhookEvent = match serde_json::from_value(raw.clone()) {
        Ok(event) => event,
        Err(e) => {
            debug!("Ignoring malformed event: {}", e);
            return None;
        }
    };

    if event.event_type.as_deref().map_or(true, str::is_empty) {
        debug!("Ignoring event without a type");
        return None;
    }
    let Some(source) = event.source.as_ref() else {
        debug!("Ignoring event without a source");
        return None;
    };

    let sender = source.sender().map(str::to_string);
    let reply_token = event.reply_token.clone().filter(|t| !t.is_empty());
    let postback_data = event
        .postback
        .as_ref()
        .and_then(|p| p.data.as_deref())
        .filter(|d| !d.is_empty());
    let message_text = event
        .message
        .as_ref()
        .and_then(|m| m.text.as_deref())
        .filter(|t| !t.is_empty());

    let (text, postback) = match (&reply_token, postback_data) {
        (Some(_), Some(data)) => (data, true),
        _ => (message_text.unwrap_or_default(), false),
    };

    Some(InboundMessage {
        reply_token,
        sender,
        text: text.to_string(),
        original_request: raw.clone(),
        postback,
        channel: Channel::Line,
    })
}

/// Normalize every event in a webhook body, dropping the ones that don't parse
pub fn parse_webhook(body: &WebhookBody) -> Vec<InboundMessage> {
    body.events.iter().filter_map(parse_event).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_message_event() {
        let raw = json!({
            "type": "message",
            "replyToken": "token-1",
            "source": {"type": "user", "userId": "U1"},
            "message": {"type": "text", "id": "m1", "text": "hello"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.reply_token.as_deref(), Some("token-1"));
        assert_eq!(parsed.sender.as_deref(), Some("U1"));
        assert_eq!(parsed.text, "hello");
        assert!(!parsed.postback);
        assert_eq!(parsed.original_request, raw);
        assert_eq!(parsed.channel, Channel::Line);
    }

    #[test]
    fn test_postback_event() {
        let raw = json!({
            "type": "postback",
            "replyToken": "token-2",
            "source": {"type": "room", "roomId": "R1"},
            "postback": {"data": "action=buy&id=1"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.text, "action=buy&id=1");
        assert!(parsed.postback);
        assert_eq!(parsed.sender.as_deref(), Some("R1"));
    }

    #[test]
    fn test_postback_preferred_over_text() {
        let raw = json!({
            "type": "postback",
            "replyToken": "token-3",
            "source": {"userId": "U1"},
            "message": {"text": "typed"},
            "postback": {"data": "tapped"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.text, "tapped");
        assert!(parsed.postback);
    }

    #[test]
    fn test_event_without_reply_token() {
        let raw = json!({
            "type": "follow",
            "source": {"type": "group", "groupId": "G1"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.reply_token, None);
        assert_eq!(parsed.sender.as_deref(), Some("G1"));
        assert_eq!(parsed.text, "");
        assert!(!parsed.postback);
    }

    #[test]
    fn test_postback_without_reply_token_is_not_a_postback() {
        let raw = json!({
            "type": "postback",
            "source": {"userId": "U1"},
            "postback": {"data": "tapped"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.text, "");
        assert!(!parsed.postback);
    }

    #[test]
    fn test_unread_fields_of_any_shape() {
        for timestamp in [json!("1462629479859"), json!(1_462_629_479_859.0_f64)] {
            let raw = json!({
                "type": "message",
                "replyToken": "t",
                "timestamp": timestamp,
                "source": {"userId": "U1"},
                "message": {"id": 42, "text": "hi"}
            });

            let parsed = parse_event(&raw).unwrap();
            assert_eq!(parsed.text, "hi");
            assert_eq!(parsed.reply_token.as_deref(), Some("t"));
        }
    }

    #[test]
    fn test_mistyped_fields_read_as_absent() {
        let raw = json!({
            "type": "postback",
            "replyToken": 7,
            "source": {"userId": ["U1"], "groupId": "G1"},
            "postback": {"data": "tapped"}
        });

        let parsed = parse_event(&raw).unwrap();
        assert_eq!(parsed.reply_token, None);
        assert_eq!(parsed.sender.as_deref(), Some("G1"));
        assert!(!parsed.postback);
    }

    #[test]
    fn test_unusable_events() {
        assert!(parse_event(&json!(null)).is_none());
        assert!(parse_event(&json!({"source": {"userId": "U1"}})).is_none());
        assert!(parse_event(&json!({"type": "", "source": {"userId": "U1"}})).is_none());
        assert!(parse_event(&json!({"type": "message"})).is_none());
        assert!(parse_event(&json!({"type": "message", "source": "U1"})).is_none());
    }

    #[test]
    fn test_parse_webhook_skips_bad_events() {
        let body: WebhookBody = serde_json::from_value(json!({
            "destination": "Ubot",
            "events": [
                {"type": "message", "replyToken": "t", "source": {"userId": "U1"}, "message": {"text": "a"}},
                {"type": "message"},
                {"type": "unfollow", "source": {"userId": "U2"}}
            ]
        }))
        .unwrap();

        let parsed = parse_webhook(&body);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "a");
        assert_eq!(parsed[1].sender.as_deref(), Some("U2"));
    }
}

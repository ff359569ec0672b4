//! Waiting room event types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// An event observed in an online quiz waiting room.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WaitingRoomEvent {
    /// A student entered the waiting room.
    #[serde(rename_all = "camelCase")]
    Joined {
        student_id: String,
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },

    /// A student left before the quiz started.
    #[serde(rename_all = "camelCase")]
    Left {
        student_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },

    /// The host started the quiz; the waiting room is closing.
    #[serde(rename_all = "camelCase")]
    Started {
        quiz_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time: Option<String>,
    },

    /// Informational message from the server.
    Info {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },

    /// An event type this client does not recognize.
    ///
    /// Unknown events are passed through rather than dropped so callers
    /// can log them.
    #[serde(skip)]
    Unknown { kind: String },
}

/// Parse a waiting room event from a websocket text frame.
///
/// Frames carrying an unrecognized `type` map to
/// [`WaitingRoomEvent::Unknown`]; frames that are not JSON objects are
/// rejected.
pub(crate) fn parse_event(text: &str) -> Result<WaitingRoomEvent, Error> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| InvalidInputError::Other {
            message: format!("malformed waiting room frame: {}", e),
        })?;

    match serde_json::from_value::<WaitingRoomEvent>(value.clone()) {
        Ok(event) => Ok(event),
        Err(_) => {
            let kind = value
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or("(untyped)")
                .to_string();
            Ok(WaitingRoomEvent::Unknown { kind })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_joined_event() {
        let event = parse_event(
            r#"{"type":"joined","studentId":"s1","name":"Alice","time":"2026-03-01T10:00:00Z"}"#,
        )
        .unwrap();

        match event {
            WaitingRoomEvent::Joined {
                student_id, name, ..
            } => {
                assert_eq!(student_id, "s1");
                assert_eq!(name, "Alice");
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn parses_left_event_without_time() {
        let event = parse_event(r#"{"type":"left","studentId":"s1"}"#).unwrap();
        assert!(matches!(event, WaitingRoomEvent::Left { .. }));
    }

    #[test]
    fn parses_started_event() {
        let event = parse_event(r#"{"type":"started","quizId":"q7"}"#).unwrap();
        match event {
            WaitingRoomEvent::Started { quiz_id, .. } => assert_eq!(quiz_id, "q7"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn unknown_type_passes_through() {
        let event = parse_event(r#"{"type":"kicked","studentId":"s1"}"#).unwrap();
        match event {
            WaitingRoomEvent::Unknown { kind } => assert_eq!(kind, "kicked"),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn untyped_object_passes_through_as_unknown() {
        let event = parse_event(r#"{"hello":"world"}"#).unwrap();
        assert!(matches!(event, WaitingRoomEvent::Unknown { .. }));
    }

    #[test]
    fn rejects_non_json() {
        assert!(parse_event("not json").is_err());
    }
}

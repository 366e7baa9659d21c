use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Một tin nhắn chat được tạo cục bộ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub from: String,
    pub text: String,
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(from: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            from: from.into(),
            text: text.into(),
            timestamp: Utc::now().timestamp(),
        }
    }

    /// Creation time as `HH:MM` in the local time zone.
    pub fn time_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.timestamp, 0)
            .map(|time| time.with_timezone(&Local).format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Profile of the signed-in user. Both fields may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[cfg(test)]
impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            avatar_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::{ChatMessage, UserProfile};

    #[test]
    fn new_message_keeps_sender_and_text() {
        let message = ChatMessage::new("octocat", "hello");
        assert_eq!(message.from, "octocat");
        assert_eq!(message.text, "hello");
        assert!(!message.id.is_empty());
        assert!(message.timestamp > 0);
    }

    #[test]
    fn time_label_uses_local_time() {
        let mut message = ChatMessage::new("octocat", "hello");
        message.timestamp = 3_600 * 13 + 60 * 7;

        let expected = Local
            .timestamp_opt(message.timestamp, 0)
            .single()
            .expect("timestamp should map to one local time")
            .format("%H:%M")
            .to_string();
        assert_eq!(message.time_label(), expected);
    }

    #[test]
    fn profile_deserializes_with_missing_fields() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name":"octocat"}"#).expect("profile should parse");
        assert_eq!(profile, UserProfile::named("octocat"));
    }
}

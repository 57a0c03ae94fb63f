use chrono::{DateTime, Utc};

/// Label used when a sender cannot be resolved to a display name.
pub const UNKNOWN_SENDER: &str = "Unknown";

/// Label used when a forwarded message's original source cannot be resolved.
pub const UNKNOWN_SOURCE: &str = "Unknown Source";

/// Normalized chat message, produced by the fetcher and consumed by the
/// whole pipeline.
///
/// `timestamp` is always the human-readable rendering of `datetime`; use
/// [`Message::new`] to keep the two in sync.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub id: i32,
    pub datetime: DateTime<Utc>,
    pub timestamp: String,
    pub text: String,
    pub sender_name: String,
    pub sender_id: Option<i64>,
    pub is_reply: bool,
    pub reply_to_msg_id: Option<i32>,
    pub is_forwarded: bool,
    pub forwarded_from: Option<String>,
}

impl Message {
    pub fn new(
        id: i32,
        datetime: DateTime<Utc>,
        text: impl Into<String>,
        sender_name: impl Into<String>,
        sender_id: Option<i64>,
    ) -> Self {
        Message {
            id,
            timestamp: Self::render_timestamp(&datetime),
            datetime,
            text: text.into(),
            sender_name: sender_name.into(),
            sender_id,
            is_reply: false,
            reply_to_msg_id: None,
            is_forwarded: false,
            forwarded_from: None,
        }
    }

    pub fn render_timestamp(datetime: &DateTime<Utc>) -> String {
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

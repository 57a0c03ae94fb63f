use chrono::{TimeZone, Utc};

use crate::Message;

/// Message `minutes_after` minutes past a fixed epoch. Higher ids are newer,
/// matching what the fetcher produces.
pub fn msg(id: i32, minutes_after: i64, sender: &str, text: &str) -> Message {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let datetime = base + chrono::Duration::minutes(minutes_after);

    Message::new(id, datetime, text, sender, Some(1000 + id as i64))
}

pub fn reply(id: i32, minutes_after: i64, sender: &str, text: &str, reply_to: i32) -> Message {
    Message {
        is_reply: true,
        reply_to_msg_id: Some(reply_to),
        ..msg(id, minutes_after, sender, text)
    }
}

pub fn forwarded(
    id: i32,
    minutes_after: i64,
    sender: &str,
    text: &str,
    source: Option<&str>,
) -> Message {
    Message {
        is_forwarded: true,
        forwarded_from: source.map(String::from),
        ..msg(id, minutes_after, sender, text)
    }
}

/// Newest-first conversation, the order a history fetch yields.
pub fn conversation() -> Vec<Message> {
    vec![
        reply(5, 40, "@alice", "agreed, let's ship it", 3),
        msg(4, 30, "@carol", "lunch anyone?"),
        msg(3, 20, "@bob", "I think we should refactor first"),
        reply(2, 10, "@alice", "looks good to me", 1),
        msg(1, 0, "@bob", "draft is ready for review"),
    ]
}

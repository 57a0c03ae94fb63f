use std::collections::HashSet;

use crate::Message;

/// Select messages authored by `targets` and extend the selection with the
/// messages they reply to.
///
/// Returns `(filtered, extended)`. With no targets this is the identity
/// operation and both outputs equal the full input. `extended` is the
/// filtered subset followed by the referenced context messages, deduplicated
/// by id; chronological ordering is re-established later by the transcript
/// assembler. Replies pointing outside the input (e.g. beyond the fetch
/// window) are silently dropped.
pub fn filter_and_extend(messages: &[Message], targets: &[String]) -> (Vec<Message>, Vec<Message>) {
    if targets.is_empty() {
        return (messages.to_vec(), messages.to_vec());
    }

    let targets: HashSet<String> = targets.iter().map(|t| normalize_target(t)).collect();

    let filtered: Vec<Message> = messages
        .iter()
        .filter(|msg| {
            targets.contains(&normalize_target(&msg.sender_name))
                || msg
                    .sender_id
                    .is_some_and(|id| targets.contains(&id.to_string()))
        })
        .cloned()
        .collect();

    // Messages the filtered replies point back to.
    let referenced: HashSet<i32> = filtered
        .iter()
        .filter(|m| m.is_reply)
        .filter_map(|m| m.reply_to_msg_id)
        .collect();

    let filtered_ids: HashSet<i32> = filtered.iter().map(|m| m.id).collect();

    let context = messages
        .iter()
        .filter(|m| referenced.contains(&m.id) && !filtered_ids.contains(&m.id))
        .cloned();

    let mut extended = filtered.clone();
    extended.extend(context);

    (filtered, extended)
}

/// Case-insensitive target token: surrounding whitespace and a leading `@`
/// do not count. Numeric ids are matched via their decimal rendering.
fn normalize_target(token: &str) -> String {
    token.trim().trim_start_matches('@').to_lowercase()
}

//! Transcript assembly: flattens a message set into the chronologically
//! ordered text block fed to the summarization prompt, plus best-effort
//! extraction of source names embedded in message bodies.

use std::collections::BTreeSet;

use crate::message::UNKNOWN_SOURCE;
use crate::Message;

/// Render a message set as one annotated line per message, sorted ascending
/// by `datetime`. This is the only place chronological order is enforced;
/// upstream order is newest-first with context messages appended.
pub fn assemble(messages: &[Message]) -> String {
    let mut ordered: Vec<&Message> = messages.iter().collect();
    // Stable: ties keep their input relative order.
    ordered.sort_by_key(|m| m.datetime);

    ordered
        .iter()
        .map(|m| render_line(m))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(msg: &Message) -> String {
    if msg.is_forwarded {
        let source = msg.forwarded_from.as_deref().unwrap_or(UNKNOWN_SOURCE);
        format!(
            "[{}] {} shared content originally by {}: {}",
            msg.timestamp, msg.sender_name, source, msg.text
        )
    } else {
        format!("[{}] {}: {}", msg.timestamp, msg.sender_name, msg.text)
    }
}

/// Substitute the `{participants}` and `{messages}` placeholders of a prompt
/// template. An empty participant list renders as the literal `None`.
pub fn render_prompt(template: &str, participant_names: &[&str], transcript: &str) -> String {
    let participants = if participant_names.is_empty() {
        "None".to_string()
    } else {
        participant_names.join(", ")
    };

    template
        .replace("{participants}", &participants)
        .replace("{messages}", transcript)
}

/// Capability to pull embedded source names out of free message text.
///
/// Implementations must be total: malformed text yields an empty result for
/// that message, never a failure.
pub trait SourceExtractor {
    fn extract(&self, text: &str) -> Vec<String>;
}

const SOURCE_MARKER: char = '💰';
const SOURCE_BRACKET: char = '【';
const SOURCE_PREFIX: &str = "from: 💰";

/// Extractor for the signal-channel convention: a source name sits between
/// `💰` and `【`, or follows `from: 💰` up to the next whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerSourceExtractor;

impl SourceExtractor for MarkerSourceExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let Some(marker) = text.find(SOURCE_MARKER) else {
            return Vec::new();
        };

        let mut names = Vec::new();

        if let Some(bracket) = text.find(SOURCE_BRACKET) {
            // Bracketed form takes precedence; a bracket before the marker
            // means there is nothing to extract from this message.
            let start = marker + SOURCE_MARKER.len_utf8();
            if bracket > start {
                let name = text[start..bracket].trim();
                if !name.is_empty() {
                    names.push(name.to_string());
                }
            }
        } else if let Some((_, rest)) = text.split_once(SOURCE_PREFIX) {
            if let Some(word) = rest.split_whitespace().next() {
                names.push(word.to_string());
            }
        }

        names
    }
}

/// Run an extractor over a whole message set, deduplicating into a
/// lexicographically sorted list.
pub fn collect_sources<E>(messages: &[Message], extractor: &E) -> Vec<String>
where
    E: SourceExtractor + ?Sized,
{
    let mut names = BTreeSet::new();

    for msg in messages {
        for name in extractor.extract(&msg.text) {
            names.insert(name);
        }
    }

    names.into_iter().collect()
}

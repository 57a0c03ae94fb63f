use crate::message::UNKNOWN_SENDER;
use crate::Message;

/// Participant name -> messages, in the order participants and messages were
/// first encountered. The encounter order feeds the participant list of the
/// summarization prompt, so a hash map would not do here.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ParticipantIndex {
    entries: Vec<(String, Vec<Message>)>,
}

impl ParticipantIndex {
    pub fn push(&mut self, name: &str, message: Message) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((name.to_string(), vec![message])),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&[Message]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Message])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Partition messages by sender display name. Messages with an empty sender
/// name are grouped under the `"Unknown"` label.
pub fn group_by_participant(messages: &[Message]) -> ParticipantIndex {
    let mut index = ParticipantIndex::default();

    for msg in messages {
        let name = if msg.sender_name.is_empty() {
            UNKNOWN_SENDER
        } else {
            msg.sender_name.as_str()
        };

        index.push(name, msg.clone());
    }

    index
}

use grammers_tl_types as tl;
use tgdigest_core::{Message, UNKNOWN_SENDER, UNKNOWN_SOURCE};

use crate::{FetchResult, TelegramFetcher};

/// Unread slice of one chat, as reported by its dialog entry.
///
/// `unread_count` counts the text-bearing messages actually kept, not the
/// raw counter Telegram reports (media and service messages are dropped by
/// normalization).
#[derive(Debug, Clone)]
pub struct UnreadBatch {
    pub chat_id: Option<i64>,
    pub chat_title: String,
    pub unread_count: usize,
    pub messages: Vec<Message>,
}

impl TelegramFetcher {
    /// Fetch up to `limit` messages from a chat, newest first, normalized
    /// to text-bearing records. Returns the messages and the chat title
    /// (falling back to the literal reference when no title is known).
    pub async fn fetch_messages(
        &self,
        chat_ref: &str,
        limit: usize,
    ) -> FetchResult<(Vec<Message>, String)> {
        let peer = self.resolve_chat(chat_ref).await?;
        let chat_title = peer_title(&peer).unwrap_or_else(|| chat_ref.to_string());

        tracing::info!(%chat_title, limit, "fetching messages");

        let mut messages = Vec::new();
        let mut history = self.client.iter_messages(&peer).limit(limit);

        while let Some(raw) = history.next().await? {
            if let Some(message) = normalize(&raw) {
                messages.push(message);
            } else {
                tracing::debug!(message_id = raw.id(), "skipping non-text message");
            }
        }

        tracing::info!(count = messages.len(), %chat_title, "fetched messages");

        Ok((messages, chat_title))
    }

    /// Fetch only the unread messages of a chat, bounded by the unread
    /// counter of its dialog entry. A chat with nothing unread yields an
    /// empty batch, not an error.
    pub async fn fetch_unread(&self, chat_ref: &str) -> FetchResult<UnreadBatch> {
        let peer = self.resolve_chat(chat_ref).await?;
        let chat_title = peer_title(&peer).unwrap_or_else(|| chat_ref.to_string());
        let chat_id = peer.id().bare_id();

        let mut reported_unread = 0usize;
        let mut dialogs = self.client.iter_dialogs();

        while let Some(dialog) = dialogs.next().await? {
            if dialog.peer().id().bare_id() == chat_id {
                reported_unread = dialog_unread_count(&dialog);
                break;
            }
        }

        if reported_unread == 0 {
            tracing::info!(%chat_title, "no unread messages");

            return Ok(UnreadBatch {
                chat_id: Some(chat_id),
                chat_title,
                unread_count: 0,
                messages: Vec::new(),
            });
        }

        tracing::info!(%chat_title, reported_unread, "fetching unread messages");

        // Unread messages are the most recent ones.
        let mut messages = Vec::new();
        let mut skipped = 0usize;
        let mut history = self.client.iter_messages(&peer).limit(reported_unread);

        while let Some(raw) = history.next().await? {
            match normalize(&raw) {
                Some(message) => messages.push(message),
                None => skipped += 1,
            }
        }

        tracing::info!(
            %chat_title,
            kept = messages.len(),
            skipped,
            "fetched unread messages"
        );

        Ok(UnreadBatch {
            chat_id: Some(chat_id),
            chat_title,
            unread_count: messages.len(),
            messages,
        })
    }
}

/// Convert a raw Telegram message into the normalized pipeline record.
/// Service messages and messages without text are dropped.
fn normalize(message: &grammers_client::types::Message) -> Option<Message> {
    if message.action().is_some() {
        return None;
    }

    let text = message.text();
    if text.is_empty() {
        return None;
    }

    let (sender_name, sender_id) = match message.sender() {
        Some(sender) => (display_name(&sender), Some(sender.id().bare_id())),
        None => (UNKNOWN_SENDER.to_string(), None),
    };

    let mut normalized = Message::new(message.id(), message.date(), text, sender_name, sender_id);

    if let Some(reply_to) = message.reply_to_message_id() {
        normalized.is_reply = true;
        normalized.reply_to_msg_id = Some(reply_to);
    }

    if let Some(header) = message.forward_header() {
        normalized.is_forwarded = true;
        normalized.forwarded_from = Some(forward_source(&header));
    }

    Some(normalized)
}

/// Display name of a peer: `@username` when available, full name for users,
/// title for groups and channels.
fn display_name(peer: &grammers_client::types::Peer) -> String {
    use grammers_client::types::Peer;

    if let Some(username) = peer.username() {
        return format!("@{username}");
    }

    match peer {
        Peer::User(user) => {
            let full_name = user.full_name();
            if full_name.is_empty() {
                "Unknown User".to_string()
            } else {
                full_name
            }
        }
        Peer::Group(group) => group
            .title()
            .filter(|t| !t.is_empty())
            .unwrap_or("Unknown Channel")
            .to_string(),
        Peer::Channel(channel) => {
            let title = channel.title();
            if title.is_empty() {
                "Unknown Channel".to_string()
            } else {
                title.to_string()
            }
        }
    }
}

fn peer_title(peer: &grammers_client::types::Peer) -> Option<String> {
    let name = display_name(peer);
    (!name.is_empty()).then_some(name)
}

fn forward_source(header: &tl::enums::MessageFwdHeader) -> String {
    let tl::enums::MessageFwdHeader::Header(header) = header;

    header
        .from_name
        .clone()
        .unwrap_or_else(|| UNKNOWN_SOURCE.to_string())
}

fn dialog_unread_count(dialog: &grammers_client::types::Dialog) -> usize {
    match &dialog.raw {
        tl::enums::Dialog::Dialog(d) => d.unread_count.max(0) as usize,
        tl::enums::Dialog::Folder(_) => 0,
    }
}

/// Reduce a user-facing chat id to Telegram's bare id: `-100`-prefixed
/// supergroup/channel ids lose the prefix, plain negative group ids lose
/// the sign.
pub(crate) fn bare_chat_id(id: i64) -> i64 {
    const SUPERGROUP_OFFSET: i64 = 1_000_000_000_000;

    if id >= 0 {
        id
    } else if -id >= SUPERGROUP_OFFSET {
        -id - SUPERGROUP_OFFSET
    } else {
        -id
    }
}

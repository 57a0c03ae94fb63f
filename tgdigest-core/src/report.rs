use crate::{Message, SummaryOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct MessageCounts {
    pub total: usize,
    pub filtered: usize,
    pub with_context: usize,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}

impl DateRange {
    /// Date range of the filtered (not extended) message set.
    ///
    /// The fetcher yields messages newest-first, so the earliest message is
    /// the last element and the latest the first. That assumption is checked
    /// here: an out-of-order slice (possible after merging fetches) falls
    /// back to a full scan instead of trusting the endpoints.
    pub fn from_filtered(filtered: &[Message]) -> Self {
        if filtered.is_empty() {
            return DateRange::default();
        }

        let newest_first = filtered.windows(2).all(|w| w[0].datetime >= w[1].datetime);

        if newest_first {
            DateRange {
                earliest: filtered.last().map(|m| m.timestamp.clone()),
                latest: filtered.first().map(|m| m.timestamp.clone()),
            }
        } else {
            tracing::warn!("filtered messages are not newest-first, scanning for date range");

            DateRange {
                earliest: filtered
                    .iter()
                    .min_by_key(|m| m.datetime)
                    .map(|m| m.timestamp.clone()),
                latest: filtered
                    .iter()
                    .max_by_key(|m| m.datetime)
                    .map(|m| m.timestamp.clone()),
            }
        }
    }
}

/// Final immutable record of one analysis run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisReport {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub chat_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<String>>,
    pub message_count: MessageCounts,
    pub date_range: DateRange,
    pub text_summaries: SummaryOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unread_count: Option<usize>,
}

impl AnalysisReport {
    pub fn success(
        chat_title: impl Into<String>,
        target_users: Option<Vec<String>>,
        message_count: MessageCounts,
        date_range: DateRange,
        text_summaries: SummaryOutcome,
    ) -> Self {
        AnalysisReport {
            status: Status::Success,
            message: None,
            chat_title: chat_title.into(),
            target_users,
            message_count,
            date_range,
            text_summaries,
            unread_count: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        AnalysisReport {
            status: Status::Error,
            message: Some(message.into()),
            chat_title: String::new(),
            target_users: None,
            message_count: MessageCounts::default(),
            date_range: DateRange::default(),
            text_summaries: SummaryOutcome::default(),
            unread_count: None,
        }
    }

    pub fn info(message: impl Into<String>, chat_title: impl Into<String>) -> Self {
        AnalysisReport {
            status: Status::Info,
            message: Some(message.into()),
            chat_title: chat_title.into(),
            target_users: None,
            message_count: MessageCounts::default(),
            date_range: DateRange::default(),
            text_summaries: SummaryOutcome::default(),
            unread_count: None,
        }
    }
}

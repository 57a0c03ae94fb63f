mod filter;
mod group;
mod message;
mod parser;
mod report;
pub mod transcript;

#[cfg(test)]
mod tests;

pub use filter::filter_and_extend;
pub use group::{ParticipantIndex, group_by_participant};
pub use message::{Message, UNKNOWN_SENDER, UNKNOWN_SOURCE};
pub use parser::{SummaryOutcome, parse_response};
pub use report::{AnalysisReport, DateRange, MessageCounts, Status};

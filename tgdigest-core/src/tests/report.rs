use crate::tests::support::{conversation, msg};
use crate::{AnalysisReport, DateRange, MessageCounts, Status, SummaryOutcome};

#[test]
fn test_date_range_from_newest_first_slice() {
    let messages = conversation();

    let range = DateRange::from_filtered(&messages);

    assert_eq!(range.earliest.as_deref(), Some("2024-05-01 12:00:00"));
    assert_eq!(range.latest.as_deref(), Some("2024-05-01 12:40:00"));
}

#[test]
fn test_date_range_empty_input() {
    let range = DateRange::from_filtered(&[]);

    assert_eq!(range.earliest, None);
    assert_eq!(range.latest, None);
}

#[test]
fn test_date_range_rescans_out_of_order_input() {
    // Oldest-first, i.e. the newest-first assumption is violated; trusting
    // the endpoints would swap earliest and latest.
    let messages = vec![
        msg(1, 0, "@a", "first"),
        msg(3, 20, "@a", "last"),
        msg(2, 10, "@a", "middle"),
    ];

    let range = DateRange::from_filtered(&messages);

    assert_eq!(range.earliest.as_deref(), Some("2024-05-01 12:00:00"));
    assert_eq!(range.latest.as_deref(), Some("2024-05-01 12:20:00"));
}

#[test]
fn test_date_range_single_message() {
    let messages = vec![msg(1, 5, "@a", "only")];

    let range = DateRange::from_filtered(&messages);

    assert_eq!(range.earliest, range.latest);
    assert_eq!(range.earliest.as_deref(), Some("2024-05-01 12:05:00"));
}

#[test]
fn test_error_report_shape() {
    let report = AnalysisReport::error("No messages found in the specified chat");

    assert_eq!(report.status, Status::Error);
    assert_eq!(
        report.message.as_deref(),
        Some("No messages found in the specified chat")
    );
    assert_eq!(report.message_count, MessageCounts::default());
}

#[test]
fn test_info_report_keeps_chat_title() {
    let report = AnalysisReport::info("No unread messages", "Dev Chat");

    assert_eq!(report.status, Status::Info);
    assert_eq!(report.chat_title, "Dev Chat");
}

#[test]
fn test_report_serializes_like_the_wire_format() {
    let mut summaries = SummaryOutcome::default();
    summaries.overall = Some("all good".to_string());
    summaries
        .by_participant
        .insert("Alice".to_string(), "reviewed".to_string());

    let report = AnalysisReport::success(
        "Dev Chat",
        Some(vec!["alice".to_string()]),
        MessageCounts {
            total: 5,
            filtered: 2,
            with_context: 4,
        },
        DateRange::from_filtered(&conversation()),
        summaries,
    );

    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["status"], "success");
    assert_eq!(json["message_count"]["with_context"], 4);
    assert_eq!(json["text_summaries"]["overall_summary"], "all good");
    assert_eq!(json["text_summaries"]["by_participant"]["Alice"], "reviewed");
    assert!(json.get("message").is_none());
    assert!(json.get("unread_count").is_none());
}

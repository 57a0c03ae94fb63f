use std::path::Path;

use tgdigest_core::{AnalysisReport, Status};

use crate::cli::OutputFormat;

/// Make a summary displayable: placeholder for empty, error summaries set
/// in italics, model thinking blocks stripped.
pub fn clean_summary(summary: &str) -> String {
    if summary.is_empty() {
        return "No summary available.".to_string();
    }

    if summary.starts_with("Error generating") {
        return format!("*{summary}*");
    }

    if summary.contains("<think>") {
        if let Some(end) = summary.find("</think>") {
            return summary[end + "</think>".len()..].trim().to_string();
        }
    }

    summary.to_string()
}

pub fn format_results(report: &AnalysisReport, format: OutputFormat) -> String {
    if report.status != Status::Success {
        return format!(
            "Error: {}",
            report.message.as_deref().unwrap_or("Unknown error")
        );
    }

    // A generated summary dictates its own layout regardless of format.
    if report
        .text_summaries
        .overall
        .as_deref()
        .is_some_and(|s| !s.is_empty())
    {
        return format_summary_results(report);
    }

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .unwrap_or_else(|e| format!("Error: could not serialize results: {e}")),
        OutputFormat::Markdown => format_as_markdown(report),
        OutputFormat::Text => format_as_text(report),
    }
}

fn format_summary_results(report: &AnalysisReport) -> String {
    let mut output = format!("# Telegram Chat Analysis: {}\n\n", report.chat_title);
    output += &format!(
        "Messages analyzed: {}\n",
        report.message_count.with_context
    );
    output += &format!(
        "Date Range: {} to {}\n\n",
        report.date_range.earliest.as_deref().unwrap_or("None"),
        report.date_range.latest.as_deref().unwrap_or("None"),
    );

    if let Some(overall) = &report.text_summaries.overall {
        output += &clean_summary(overall);
        output += "\n\n";
    }

    output += "## Participant Summaries\n\n";

    // Sorted for deterministic output.
    let mut participants: Vec<_> = report.text_summaries.by_participant.iter().collect();
    participants.sort_by_key(|(name, _)| name.as_str());

    for (participant, summary) in participants {
        output += &format!("### {participant}\n\n{}\n\n", clean_summary(summary));
    }

    output
}

fn format_as_markdown(report: &AnalysisReport) -> String {
    let mut output = format!("# Telegram Chat Summary: {}\n\n", report.chat_title);

    if let Some(users) = &report.target_users {
        output += &format!("**Users**: {}\n", users.join(", "));
    }

    output += &format!(
        "**Messages**: {} (with context: {})\n",
        report.message_count.filtered, report.message_count.with_context
    );
    output += &format!(
        "**Date Range**: {} to {}\n\n",
        report.date_range.earliest.as_deref().unwrap_or("None"),
        report.date_range.latest.as_deref().unwrap_or("None"),
    );

    output
}

fn format_as_text(report: &AnalysisReport) -> String {
    let mut output = format!("Telegram Chat: {}\n", report.chat_title);

    if let Some(users) = &report.target_users {
        output += &format!("Users: {}\n", users.join(", "));
    }

    output += &format!(
        "Messages: {} (with context: {})\n",
        report.message_count.filtered, report.message_count.with_context
    );
    output += &format!(
        "Date Range: {} to {}\n\n",
        report.date_range.earliest.as_deref().unwrap_or("None"),
        report.date_range.latest.as_deref().unwrap_or("None"),
    );

    output
}

/// Write to the given file, or print to the console. A file write failure
/// falls back to the console rather than losing the results.
pub fn write_output(output: &str, path: Option<&Path>) {
    match path {
        Some(path) => {
            if let Err(error) = std::fs::write(path, output) {
                tracing::error!(%error, path = %path.display(), "error writing output file");
                println!("{output}");
            } else {
                tracing::info!(path = %path.display(), "results saved");
            }
        }
        None => println!("{output}"),
    }
}

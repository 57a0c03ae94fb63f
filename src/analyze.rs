use tgdigest_ai::Summarizer;
use tgdigest_client::TelegramFetcher;
use tgdigest_core::transcript::{self, MarkerSourceExtractor};
use tgdigest_core::{
    filter_and_extend, group_by_participant, parse_response, AnalysisReport, DateRange,
    MessageCounts, Message, ParticipantIndex, SummaryOutcome,
};

pub struct AnalyzeOptions {
    pub chat_id: String,
    pub target_users: Option<Vec<String>>,
    pub limit: usize,
    pub model: String,
    pub unread_only: bool,
}

/// Run one full analysis: fetch, filter with reply context, group by
/// participant, summarize in a single model call, parse the response and
/// assemble the report.
///
/// Only fetch failures propagate as errors; everything downstream degrades
/// into the report itself (error status, fallback summaries).
pub async fn analyze_messages<S: Summarizer>(
    fetcher: &TelegramFetcher,
    summarizer: &S,
    prompt_template: &str,
    options: &AnalyzeOptions,
) -> anyhow::Result<AnalysisReport> {
    let (messages, chat_title, unread_count) = if options.unread_only {
        let batch = fetcher.fetch_unread(&options.chat_id).await?;

        if batch.unread_count == 0 {
            return Ok(AnalysisReport::info(
                "No unread messages found in the specified chat",
                batch.chat_title,
            ));
        }

        (batch.messages, batch.chat_title, Some(batch.unread_count))
    } else {
        let (messages, chat_title) = fetcher
            .fetch_messages(&options.chat_id, options.limit)
            .await?;

        if messages.is_empty() {
            return Ok(AnalysisReport::error(
                "No messages found in the specified chat",
            ));
        }

        (messages, chat_title, None)
    };

    let targets = options.target_users.clone().unwrap_or_default();
    let (filtered, extended) = filter_and_extend(&messages, &targets);
    let participants = group_by_participant(&extended);

    let text_summaries = if extended.is_empty() {
        SummaryOutcome::default()
    } else {
        summarize(
            summarizer,
            prompt_template,
            &extended,
            &participants,
            &options.model,
        )
        .await
    };

    let mut report = AnalysisReport::success(
        chat_title,
        options.target_users.clone(),
        MessageCounts {
            total: messages.len(),
            filtered: filtered.len(),
            with_context: extended.len(),
        },
        DateRange::from_filtered(&filtered),
        text_summaries,
    );
    report.unread_count = unread_count;

    Ok(report)
}

/// One unified model call for the whole conversation instead of one call
/// per participant; keeps the tool clear of provider rate limits at the
/// cost of per-participant isolation.
async fn summarize<S: Summarizer>(
    summarizer: &S,
    prompt_template: &str,
    extended: &[Message],
    participants: &ParticipantIndex,
    model: &str,
) -> SummaryOutcome {
    let transcript_text = transcript::assemble(extended);

    // Best-effort enrichment; purely informational.
    let sources = transcript::collect_sources(extended, &MarkerSourceExtractor);
    if !sources.is_empty() {
        tracing::info!(?sources, "embedded source names found in messages");
    }

    let names: Vec<&str> = participants.names().collect();
    let prompt = transcript::render_prompt(prompt_template, &names, &transcript_text);

    tracing::info!(%model, participants = names.len(), "generating unified summary");

    match summarizer.summarize(&prompt, model).await {
        Ok(raw) => {
            let outcome = parse_response(&raw);

            if outcome.parse_fallback {
                tracing::warn!(
                    "failed to parse structured response, using entire response as overall summary"
                );
            }

            outcome
        }
        Err(error) => {
            tracing::error!(%error, "error generating unified summary");

            SummaryOutcome {
                overall: Some(format!("Error generating unified summary: {error}")),
                by_participant: Default::default(),
                parse_fallback: false,
            }
        }
    }
}

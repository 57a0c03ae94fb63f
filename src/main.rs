mod analyze;
mod cli;
mod config;
mod output;
mod prompts;

#[cfg(test)]
mod tests;

use clap::Parser;
use tgdigest_ai::openrouter::OpenRouterClient;
use tgdigest_client::TelegramFetcher;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    let config = config::Config::new();

    let Some(chat_id) = cli.chat_id.clone().or_else(|| config.default_chat_id.clone()) else {
        tracing::error!("No chat ID provided and no default found in config.");
        tracing::error!("Specify a chat with -c/--chat-id or set DEFAULT_CHAT_ID.");
        std::process::exit(1);
    };

    let fetcher = TelegramFetcher::new(&config.telegram)?;
    fetcher.authorize().await?;

    let summarizer = OpenRouterClient::new(&config.openrouter);
    let prompt_template = prompts::get_prompt(&config.prompt_dir, prompts::OVERALL_PROMPT);

    let options = analyze::AnalyzeOptions {
        chat_id,
        target_users: cli.users.clone(),
        limit: cli.limit.unwrap_or(config.message_limit),
        model: cli.model.clone().unwrap_or_else(|| config.default_model.clone()),
        unread_only: cli.unread,
    };

    let report = analyze::analyze_messages(&fetcher, &summarizer, &prompt_template, &options).await?;

    let rendered = output::format_results(&report, cli.format);
    output::write_output(&rendered, cli.output.as_deref());

    Ok(())
}

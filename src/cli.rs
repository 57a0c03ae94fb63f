use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "tgdigest",
    version,
    about = "Analyze and summarize Telegram messages with conversation context"
)]
pub struct Cli {
    /// Chat to analyze: @handle or numeric id (falls back to the configured default)
    #[arg(short = 'c', long = "chat-id")]
    pub chat_id: Option<String>,

    /// Target users to focus on (usernames or numeric ids)
    #[arg(short = 'u', long = "users", num_args = 1..)]
    pub users: Option<Vec<String>>,

    /// Maximum number of messages to fetch
    #[arg(short = 'n', long = "num-messages")]
    pub limit: Option<usize>,

    /// Output file for results (default: print to console)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// OpenRouter model to use
    #[arg(long)]
    pub model: Option<String>,

    /// Fetch only unread messages from the chat
    #[arg(long)]
    pub unread: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

use std::path::PathBuf;

/// Telegram API credentials and the sqlite session location.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_id: i32,
    pub api_hash: String,
    pub session_file: PathBuf,
}

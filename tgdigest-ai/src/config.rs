#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    pub api_key: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_endpoint() -> String {
    "https://openrouter.ai/api/v1/chat/completions".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

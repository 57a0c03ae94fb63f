#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}

pub type AiResult<T> = Result<T, AiError>;

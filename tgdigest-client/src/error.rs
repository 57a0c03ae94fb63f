#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Grammers session storage error: {0}")]
    Session(#[from] sqlite::Error),

    #[error("Grammers invocation error: {0}")]
    Invocation(#[from] grammers_mtsender::InvocationError),

    #[error("Sign in error: {0}")]
    SignIn(Box<grammers_client::SignInError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chat not found: {0}")]
    ChatNotFound(String),
}

impl From<grammers_client::SignInError> for FetchError {
    fn from(err: grammers_client::SignInError) -> Self {
        FetchError::SignIn(Box::new(err))
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(serde::Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

#[derive(serde::Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(serde::Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(serde::Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(serde::Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(serde::Deserialize)]
pub struct ApiError {
    pub message: String,
}

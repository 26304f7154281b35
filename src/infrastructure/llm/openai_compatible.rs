use serde::{Deserialize, Serialize};

use crate::application::ports::CompletionError;

use super::SAMPLING_TEMPERATURE;

#[derive(Serialize)]
pub(super) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

#[derive(Serialize, Deserialize, Clone)]
pub(super) struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub(super) struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
pub(super) struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Deserialize)]
pub(super) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Deserialize)]
pub(super) struct ApiErrorDetail {
    pub message: String,
}

/// Sends one OpenAI-style chat completion (system prompt + user transcript)
/// and returns the first generated choice. Shared by every backend that
/// speaks the `/chat/completions` dialect.
pub(super) async fn request_chat_completion(
    client: &reqwest::Client,
    base_url: &str,
    model: &str,
    api_key: &str,
    prompt: &str,
    transcript: &str,
) -> Result<String, CompletionError> {
    let body = ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: prompt.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: transcript.to_string(),
            },
        ],
        temperature: SAMPLING_TEMPERATURE,
    };

    let response = client
        .post(format!("{}/chat/completions", base_url))
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
        .map_err(|e| CompletionError::Transport(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| format!("status {}: {}", status, text));
        return Err(CompletionError::ProviderRejected(message));
    }

    let completion: ChatCompletionResponse = response
        .json()
        .await
        .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::InvalidResponse("empty choices".to_string()))
}

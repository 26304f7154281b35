use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use semporna::application::ports::{CompletionEngine, CompletionError};
use semporna::domain::{CredentialSet, Provider};
use semporna::infrastructure::llm::{GeminiClient, GroqChatClient, OpenAiChatClient};

type Captured = Arc<Mutex<Option<(Option<String>, Value)>>>;

async fn start_mock_server(
    route: &'static str,
    auth_header: &'static str,
    response_status: u16,
    response_body: Value,
) -> (String, oneshot::Sender<()>, Captured) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: Captured = Arc::new(Mutex::new(None));
    let captured_in_handler = Arc::clone(&captured);

    let app = Router::new().route(
        route,
        post(
            move |headers: HeaderMap, axum::Json(body): axum::Json<Value>| {
                let captured = Arc::clone(&captured_in_handler);
                let response_body = response_body.clone();
                async move {
                    let auth = headers
                        .get(auth_header)
                        .and_then(|v| v.to_str().ok())
                        .map(String::from);
                    *captured.lock().unwrap() = Some((auth, body));

                    let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                    (status, axum::Json(response_body)).into_response()
                }
            },
        ),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx, captured)
}

fn chat_response(content: &str) -> Value {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

fn credentials() -> CredentialSet {
    CredentialSet::new()
        .with(Provider::OpenAi, "sk-openai")
        .with(Provider::Gemini, "sk-gemini")
        .with(Provider::Groq, "sk-groq")
}

#[tokio::test]
async fn given_openai_when_completing_then_system_prompt_user_transcript_and_fixed_temperature() {
    let (base_url, shutdown_tx, captured) = start_mock_server(
        "/chat/completions",
        "authorization",
        200,
        chat_response("Good service."),
    )
    .await;

    let client = OpenAiChatClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize service.", &credentials())
        .await;

    assert_eq!(result.unwrap(), "Good service.");

    let (auth, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-openai"));
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "Summarize service.");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Hello");
    let temperature = body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-3);

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_error_object_when_completing_then_provider_rejected_carries_message() {
    let (base_url, shutdown_tx, _captured) = start_mock_server(
        "/chat/completions",
        "authorization",
        429,
        json!({"error": {"message": "Rate limit reached"}}),
    )
    .await;

    let client = OpenAiChatClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize service.", &credentials())
        .await;

    match result {
        Err(CompletionError::ProviderRejected(message)) => {
            assert!(message.contains("Rate limit reached"));
        }
        other => panic!("expected provider rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_invalid_response() {
    let (base_url, shutdown_tx, _captured) = start_mock_server(
        "/chat/completions",
        "authorization",
        200,
        json!({"choices": []}),
    )
    .await;

    let client = OpenAiChatClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize service.", &credentials())
        .await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_credential_when_completing_then_no_request_is_sent() {
    let client = OpenAiChatClient::new(reqwest::Client::new(), None);
    let result = client
        .complete("Hello", "Summarize service.", &CredentialSet::new())
        .await;

    assert!(matches!(
        result,
        Err(CompletionError::MissingCredential(Provider::OpenAi))
    ));
}

#[tokio::test]
async fn given_groq_when_completing_then_groq_key_and_model_are_used() {
    let (base_url, shutdown_tx, captured) = start_mock_server(
        "/chat/completions",
        "authorization",
        200,
        chat_response("Happy customer."),
    )
    .await;

    let client = GroqChatClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize customer.", &credentials())
        .await;

    assert_eq!(result.unwrap(), "Happy customer.");

    let (auth, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-groq"));
    assert_eq!(body["model"], "llama3-8b-8192");

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_gemini_when_completing_then_prompt_is_prepended_to_a_single_user_turn() {
    let response = json!({
        "candidates": [{"content": {"role": "model", "parts": [{"text": "Happy customer."}]}}]
    });
    let (base_url, shutdown_tx, captured) = start_mock_server(
        "/models/gemini-1.5-pro:generateContent",
        "x-goog-api-key",
        200,
        response,
    )
    .await;

    let client = GeminiClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize customer.", &credentials())
        .await;

    assert_eq!(result.unwrap(), "Happy customer.");

    let (auth, body) = captured.lock().unwrap().clone().unwrap();
    assert_eq!(auth.as_deref(), Some("sk-gemini"));
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(
        body["contents"][0]["parts"][0]["text"],
        "Summarize customer.\n\nHello"
    );
    let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-3);

    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_gemini_error_object_when_completing_then_provider_rejected() {
    let (base_url, shutdown_tx, _captured) = start_mock_server(
        "/models/gemini-1.5-pro:generateContent",
        "x-goog-api-key",
        400,
        json!({"error": {"message": "API key not valid"}}),
    )
    .await;

    let client = GeminiClient::new(reqwest::Client::new(), Some(base_url));
    let result = client
        .complete("Hello", "Summarize customer.", &credentials())
        .await;

    match result {
        Err(CompletionError::ProviderRejected(message)) => {
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected provider rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

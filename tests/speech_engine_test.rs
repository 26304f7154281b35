use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::post;
use bytes::Bytes;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use semporna::application::ports::{TranscriptionEngine, TranscriptionError};
use semporna::domain::{AudioFile, CredentialSet, Provider};
use semporna::infrastructure::speech::{GroqWhisperEngine, OpenAiWhisperEngine};

type CapturedAuth = Arc<Mutex<Option<String>>>;

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>, CapturedAuth) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let captured: CapturedAuth = Arc::new(Mutex::new(None));
    let captured_in_handler = Arc::clone(&captured);

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move |headers: HeaderMap| {
            let captured = Arc::clone(&captured_in_handler);
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *captured.lock().unwrap() = auth;

                let status = axum::http::StatusCode::from_u16(response_status).unwrap();
                (status, response_body).into_response()
            }
        }),
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

fn demo_audio() -> AudioFile {
    AudioFile::new("demo.mp3", Bytes::from_static(b"fake audio bytes"))
}

#[tokio::test]
async fn given_valid_audio_when_transcribing_then_returns_trimmed_text() {
    let response_body = r#"{"text": "  Hello from Whisper  "}"#;
    let (base_url, shutdown_tx, auth) = start_mock_whisper_server(200, response_body).await;

    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let credentials = CredentialSet::new().with(Provider::OpenAi, "sk-test");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    assert_eq!(result.unwrap(), "Hello from Whisper");
    assert_eq!(
        auth.lock().unwrap().as_deref(),
        Some("Bearer sk-test"),
        "request must carry the OpenAI key as a bearer token"
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_provider_error_payload_when_transcribing_then_provider_rejected_carries_message() {
    let response_body = r#"{"error": {"message": "bad audio", "type": "invalid_request_error"}}"#;
    let (base_url, shutdown_tx, _auth) = start_mock_whisper_server(400, response_body).await;

    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let credentials = CredentialSet::new().with(Provider::OpenAi, "sk-test");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    match result {
        Err(TranscriptionError::ProviderRejected(message)) => {
            assert!(message.contains("bad audio"));
        }
        other => panic!("expected provider rejection, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_missing_openai_credential_when_transcribing_then_missing_credential() {
    let engine = OpenAiWhisperEngine::new(reqwest::Client::new(), None);
    let credentials = CredentialSet::new().with(Provider::Groq, "sk-groq");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingCredential(Provider::OpenAi))
    ));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_transcribing_then_transport_failure() {
    let engine = OpenAiWhisperEngine::new(
        reqwest::Client::new(),
        Some("http://127.0.0.1:1".to_string()),
    );
    let credentials = CredentialSet::new().with(Provider::OpenAi, "sk-test");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    assert!(matches!(result, Err(TranscriptionError::Transport(_))));
}

#[tokio::test]
async fn given_groq_selected_when_transcribing_then_request_uses_primary_credential() {
    let response_body = r#"{"text": "Hello"}"#;
    let (base_url, shutdown_tx, auth) = start_mock_whisper_server(200, response_body).await;

    let engine = GroqWhisperEngine::new(reqwest::Client::new(), Some(base_url));
    let credentials = CredentialSet::new()
        .with(Provider::Groq, "sk-groq")
        .with(Provider::OpenAi, "sk-openai");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    assert_eq!(result.unwrap(), "Hello");
    assert_eq!(
        auth.lock().unwrap().as_deref(),
        Some("Bearer sk-openai"),
        "Groq transcription must be routed with the OpenAI key, not the Groq key"
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_groq_selected_without_primary_credential_then_failure_names_openai() {
    let engine = GroqWhisperEngine::new(reqwest::Client::new(), None);
    let credentials = CredentialSet::new().with(Provider::Groq, "sk-groq");

    let result = engine.transcribe(&demo_audio(), &credentials).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::MissingCredential(Provider::OpenAi))
    ));
}

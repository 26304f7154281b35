use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use semporna::application::ports::{
    AudioStore, CredentialRepository, PromptRepository, ReportRepository, UploadRepository,
};
use semporna::application::services::AnalysisService;
use semporna::infrastructure::llm::CompletionEngineFactory;
use semporna::infrastructure::observability::{TracingConfig, init_tracing};
use semporna::infrastructure::persistence::{
    MemoryDatabase, PgCredentialRepository, PgPromptRepository, PgReportRepository,
    PgUploadRepository, create_pool,
};
use semporna::infrastructure::speech::SpeechEngineFactory;
use semporna::infrastructure::storage::{AudioStoreFactory, ObjectAudioStore};
use semporna::presentation::{AppState, Backend, RunRegistry, Settings, create_router};

/// Per-request ceiling on every provider call. No retry policy is layered on
/// top: provider-rejected requests and transport failures both surface to
/// the caller immediately.
const HTTP_TIMEOUT: Duration = Duration::from_secs(120);

type BackendParts = (
    Arc<dyn AudioStore>,
    Arc<dyn UploadRepository>,
    Arc<dyn ReportRepository>,
    Arc<dyn PromptRepository>,
    Arc<dyn CredentialRepository>,
);

/// Builds the storage/database capability set for the configured backend.
/// The pipeline never branches on the environment; it only sees these ports.
async fn build_backend(settings: &Settings) -> anyhow::Result<BackendParts> {
    match settings.backend {
        Backend::Live => {
            let pool =
                create_pool(&settings.database.url, settings.database.max_connections).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            let audio_store = AudioStoreFactory::create(&settings.storage)?;
            Ok((
                audio_store,
                Arc::new(PgUploadRepository::new(pool.clone())),
                Arc::new(PgReportRepository::new(pool.clone())),
                Arc::new(PgPromptRepository::new(pool.clone())),
                Arc::new(PgCredentialRepository::new(pool)),
            ))
        }
        Backend::Memory => {
            tracing::warn!("Memory backend selected; nothing will outlive the process");
            let db = Arc::new(MemoryDatabase::new());
            Ok((
                Arc::new(ObjectAudioStore::in_memory()),
                db.clone() as Arc<dyn UploadRepository>,
                db.clone() as Arc<dyn ReportRepository>,
                db.clone() as Arc<dyn PromptRepository>,
                db as Arc<dyn CredentialRepository>,
            ))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;
    init_tracing(TracingConfig::default(), settings.server.port);

    let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let (audio_store, uploads, reports, prompts, credentials) = build_backend(&settings).await?;

    let speech = SpeechEngineFactory::create(http.clone(), &settings.speech);
    let text = CompletionEngineFactory::create(http, &settings.llm);

    let analysis_service = Arc::new(AnalysisService::new(
        audio_store,
        Arc::clone(&uploads),
        Arc::clone(&reports),
        Arc::clone(&prompts),
        Arc::clone(&credentials),
        speech,
        text,
    ));

    let state = AppState {
        analysis_service,
        uploads,
        reports,
        prompts,
        credentials,
        runs: Arc::new(RunRegistry::new()),
    };

    let router = create_router(state);

    let addr = SocketAddr::new(settings.server.host.parse()?, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

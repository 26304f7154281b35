use std::io;

use bytes::Bytes;
use futures::stream;

use semporna::application::ports::{
    AudioStore, CredentialRepository, PromptRepository, ReportRepository, UploadRepository,
};
use semporna::domain::{
    AudioUpload, InsightReport, PromptKind, PromptTemplate, Provider, StoragePath, TextProvider,
    UserId,
};
use semporna::infrastructure::persistence::MemoryDatabase;
use semporna::infrastructure::storage::ObjectAudioStore;

// MemoryDatabase implements all four repository traits, so calls are written
// in qualified form throughout.

fn upload_for(owner: UserId) -> AudioUpload {
    AudioUpload::new(owner, StoragePath::for_upload(owner, "visit.mp3", 1000))
}

#[tokio::test]
async fn given_upserted_prompt_when_fetching_then_latest_text_is_returned() {
    let db = MemoryDatabase::new();

    let first = PromptTemplate::new(PromptKind::ServiceEvaluation, "Old prompt");
    PromptRepository::upsert(&db, &first).await.unwrap();
    let second = PromptTemplate::new(PromptKind::ServiceEvaluation, "New prompt");
    PromptRepository::upsert(&db, &second).await.unwrap();

    let fetched = PromptRepository::get(&db, PromptKind::ServiceEvaluation)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.text, "New prompt");

    let missing = PromptRepository::get(&db, PromptKind::CustomerInsight)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn given_upserted_credentials_when_listing_then_only_owner_providers_appear() {
    let db = MemoryDatabase::new();
    let owner = UserId::new();
    let stranger = UserId::new();

    CredentialRepository::upsert(&db, owner, Provider::OpenAi, "sk-openai")
        .await
        .unwrap();
    CredentialRepository::upsert(&db, owner, Provider::Groq, "sk-groq")
        .await
        .unwrap();
    CredentialRepository::upsert(&db, stranger, Provider::Gemini, "sk-gemini")
        .await
        .unwrap();

    let providers = db.providers_for_owner(owner).await.unwrap();
    assert_eq!(providers, vec![Provider::Groq, Provider::OpenAi]);

    let credentials = db.credentials_for_owner(owner).await.unwrap();
    assert_eq!(credentials.get(Provider::OpenAi), Some("sk-openai"));
    assert!(credentials.get(Provider::Gemini).is_none());
}

#[tokio::test]
async fn given_deleted_credential_when_listing_then_it_is_gone() {
    let db = MemoryDatabase::new();
    let owner = UserId::new();

    CredentialRepository::upsert(&db, owner, Provider::OpenAi, "sk-openai")
        .await
        .unwrap();
    CredentialRepository::delete(&db, owner, Provider::OpenAi)
        .await
        .unwrap();

    let providers = db.providers_for_owner(owner).await.unwrap();
    assert!(providers.is_empty());
}

#[tokio::test]
async fn given_uploads_from_two_users_when_listing_then_results_are_owner_scoped() {
    let db = MemoryDatabase::new();
    let owner = UserId::new();
    let stranger = UserId::new();

    let mine = upload_for(owner);
    UploadRepository::create(&db, &mine).await.unwrap();
    UploadRepository::create(&db, &upload_for(stranger))
        .await
        .unwrap();

    let uploads = UploadRepository::list_for_owner(&db, owner).await.unwrap();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].id, mine.id);

    let fetched = UploadRepository::get(&db, mine.id).await.unwrap();
    assert_eq!(fetched, Some(mine));
}

#[tokio::test]
async fn given_report_when_fetching_as_another_user_then_it_is_invisible() {
    let db = MemoryDatabase::new();
    let owner = UserId::new();
    let stranger = UserId::new();

    let upload = upload_for(owner);
    UploadRepository::create(&db, &upload).await.unwrap();

    let report = InsightReport::new(upload.id, "# Report".to_string(), TextProvider::OpenAi);
    ReportRepository::create(&db, &report).await.unwrap();

    let visible = db.get_for_owner(report.id, owner).await.unwrap();
    assert_eq!(visible.map(|r| r.id), Some(report.id));

    let hidden = db.get_for_owner(report.id, stranger).await.unwrap();
    assert!(hidden.is_none());

    let listed = ReportRepository::list_for_owner(&db, stranger)
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn given_in_memory_store_when_putting_then_fetch_returns_original_bytes() {
    let store = ObjectAudioStore::in_memory();
    let owner = UserId::new();
    let path = StoragePath::for_upload(owner, "visit.mp3", 1000);

    let chunks: Vec<Result<Bytes, io::Error>> =
        vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let byte_stream = Box::pin(stream::iter(chunks));

    let size = store.put(&path, byte_stream, None).await.unwrap();
    assert_eq!(size, 11);

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, b"hello world");
}

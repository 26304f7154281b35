use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{
    CredentialRepository, PromptRepository, ReportRepository, RepositoryError, UploadRepository,
};
use crate::domain::{
    AudioUpload, CredentialSet, InsightReport, PromptKind, PromptTemplate, Provider, ReportId,
    UploadId, UserId,
};

/// In-memory rendition of all four repositories, selected by the Memory
/// backend. State lives for the process lifetime only.
#[derive(Default)]
pub struct MemoryDatabase {
    uploads: RwLock<Vec<AudioUpload>>,
    reports: RwLock<Vec<InsightReport>>,
    prompts: RwLock<HashMap<PromptKind, PromptTemplate>>,
    credentials: RwLock<HashMap<(UserId, Provider), String>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UploadRepository for MemoryDatabase {
    async fn create(&self, upload: &AudioUpload) -> Result<(), RepositoryError> {
        self.uploads.write().await.push(upload.clone());
        Ok(())
    }

    async fn get(&self, id: UploadId) -> Result<Option<AudioUpload>, RepositoryError> {
        Ok(self
            .uploads
            .read()
            .await
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<AudioUpload>, RepositoryError> {
        let mut uploads: Vec<AudioUpload> = self
            .uploads
            .read()
            .await
            .iter()
            .filter(|u| u.owner_id == owner)
            .cloned()
            .collect();
        uploads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(uploads)
    }
}

#[async_trait]
impl ReportRepository for MemoryDatabase {
    async fn create(&self, report: &InsightReport) -> Result<(), RepositoryError> {
        self.reports.write().await.push(report.clone());
        Ok(())
    }

    async fn get_for_owner(
        &self,
        id: ReportId,
        owner: UserId,
    ) -> Result<Option<InsightReport>, RepositoryError> {
        let report = match self.reports.read().await.iter().find(|r| r.id == id) {
            Some(report) => report.clone(),
            None => return Ok(None),
        };
        let owned = self
            .uploads
            .read()
            .await
            .iter()
            .any(|u| u.id == report.audio_upload_id && u.owner_id == owner);
        Ok(owned.then_some(report))
    }

    async fn list_for_owner(&self, owner: UserId) -> Result<Vec<InsightReport>, RepositoryError> {
        let owned_uploads: Vec<UploadId> = self
            .uploads
            .read()
            .await
            .iter()
            .filter(|u| u.owner_id == owner)
            .map(|u| u.id)
            .collect();
        let mut reports: Vec<InsightReport> = self
            .reports
            .read()
            .await
            .iter()
            .filter(|r| owned_uploads.contains(&r.audio_upload_id))
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reports)
    }
}

#[async_trait]
impl PromptRepository for MemoryDatabase {
    async fn get(&self, kind: PromptKind) -> Result<Option<PromptTemplate>, RepositoryError> {
        Ok(self.prompts.read().await.get(&kind).cloned())
    }

    async fn upsert(&self, template: &PromptTemplate) -> Result<(), RepositoryError> {
        self.prompts
            .write()
            .await
            .insert(template.kind, template.clone());
        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for MemoryDatabase {
    async fn upsert(
        &self,
        owner: UserId,
        provider: Provider,
        secret: &str,
    ) -> Result<(), RepositoryError> {
        self.credentials
            .write()
            .await
            .insert((owner, provider), secret.to_string());
        Ok(())
    }

    async fn delete(&self, owner: UserId, provider: Provider) -> Result<(), RepositoryError> {
        self.credentials.write().await.remove(&(owner, provider));
        Ok(())
    }

    async fn providers_for_owner(&self, owner: UserId) -> Result<Vec<Provider>, RepositoryError> {
        let mut providers: Vec<Provider> = self
            .credentials
            .read()
            .await
            .keys()
            .filter(|(o, _)| *o == owner)
            .map(|(_, p)| *p)
            .collect();
        providers.sort_by_key(|p| p.as_str());
        Ok(providers)
    }

    async fn credentials_for_owner(
        &self,
        owner: UserId,
    ) -> Result<CredentialSet, RepositoryError> {
        let mut set = CredentialSet::new();
        for ((o, provider), secret) in self.credentials.read().await.iter() {
            if *o == owner {
                set.insert(*provider, secret.clone());
            }
        }
        Ok(set)
    }
}

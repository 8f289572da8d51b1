//! Ingest flow: authorize -> validate settings -> map -> create page.
//!
//! - Rejects before any outbound call when the secret or settings are wrong
//! - Creates at most one page per request, as the last step
//! - Page creation runs in its own task so a dropped caller does not abort it

use crate::domain::{
    DatabaseId, DomainError, Extraction, IngestReceipt, NewPage, build_properties,
};
use crate::ports::{IngestPort, PageSink};
use crate::shared::config::IngestSettings;
use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

/// Ingest service. Turns one extraction into one Notion page.
pub struct IngestService {
    sink: Arc<dyn PageSink>,
    settings: IngestSettings,
}

impl IngestService {
    pub fn new(sink: Arc<dyn PageSink>, settings: IngestSettings) -> Self {
        Self { sink, settings }
    }

    /// Byte-for-byte comparison against the configured secret. A missing
    /// header compares as the empty string.
    fn authorize(&self, secret: Option<&str>) -> Result<(), DomainError> {
        match &self.settings.webhook_secret {
            Some(expected) if secret.unwrap_or_default().as_bytes() != expected.as_bytes() => {
                Err(DomainError::Unauthorized)
            }
            _ => Ok(()),
        }
    }

    fn token(&self) -> Result<&str, DomainError> {
        self.settings
            .notion_token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingConfig("NOTION_TOKEN"))
    }

    fn database_id(&self) -> Result<DatabaseId, DomainError> {
        let raw = self
            .settings
            .notion_sessions_db_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingConfig("NOTION_SESSIONS_DB_ID"))?;
        DatabaseId::normalize(raw)
    }

    /// Run the full flow for one request.
    pub async fn handle(
        &self,
        extraction: &Extraction,
        secret: Option<&str>,
    ) -> Result<IngestReceipt, DomainError> {
        if let Err(e) = self.authorize(secret) {
            warn!(header_present = secret.is_some(), "rejected ingest: bad webhook secret");
            return Err(e);
        }

        let token = self.token()?;
        let database_id = self.database_id()?;

        let page = NewPage {
            token: token.to_string(),
            database_id,
            properties: build_properties(extraction, Local::now().date_naive()),
        };

        let sink = Arc::clone(&self.sink);
        let page_id = tokio::spawn(async move {
            let result = sink.create_page(&page).await;
            if let Err(ref e) = result {
                warn!(error = %e, "Notion page creation failed");
            }
            result
        })
        .await
        .map_err(|e| DomainError::Transport(format!("page creation task aborted: {}", e)))??;

        info!(
            page_id = page_id.as_deref().unwrap_or("<none>"),
            title = %extraction.session_title,
            "session page created"
        );

        Ok(IngestReceipt::created(page_id))
    }
}

#[async_trait::async_trait]
impl IngestPort for IngestService {
    async fn ingest(
        &self,
        extraction: Extraction,
        secret: Option<String>,
    ) -> Result<IngestReceipt, DomainError> {
        self.handle(&extraction, secret.as_deref()).await
    }
}

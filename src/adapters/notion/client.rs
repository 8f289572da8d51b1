//! Notion adapter. Implements PageSink by creating pages via the Notion REST API.

use crate::domain::{DomainError, NewPage};
use crate::ports::PageSink;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const NOTION_API_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Notion API adapter for creating pages in a database.
///
/// Token and database id travel with each `NewPage`, so one adapter serves
/// whatever the current settings say.
pub struct NotionAdapter {
    client: Client,
    base_url: String,
}

impl NotionAdapter {
    /// Adapter against the public Notion API.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_base_url(NOTION_API_URL)
    }

    /// Adapter against another base URL (e.g. a local stub). `base_url` is the
    /// prefix before `/pages`, without trailing slash.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DomainError::Transport(format!("HTTP client init failed: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.base_url)
    }
}

#[async_trait::async_trait]
impl PageSink for NotionAdapter {
    async fn create_page(&self, page: &NewPage) -> Result<Option<String>, DomainError> {
        let body = serde_json::json!({
            "parent": { "database_id": page.database_id.as_str() },
            "properties": page.properties,
        });

        debug!(
            database_id = %page.database_id,
            properties = page.properties.len(),
            "creating Notion page"
        );

        let res = self
            .client
            .post(self.pages_url())
            .bearer_auth(&page.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Transport(e.to_string()))?;

        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| DomainError::Transport(format!("reading response body: {}", e)))?;

        if status.as_u16() >= 300 {
            warn!(status = status.as_u16(), body = %text, "Notion API returned error");
            return Err(DomainError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(page_id(&text))
    }
}

/// `id` of the created page, if the body is a JSON object carrying a string id.
fn page_id(body: &str) -> Option<String> {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value.get("id").and_then(|v| v.as_str()).map(str::to_string),
        Err(e) => {
            warn!(error = %e, "Notion success response is not JSON");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_from_body() {
        assert_eq!(
            page_id(r#"{"object": "page", "id": "page-123"}"#).as_deref(),
            Some("page-123")
        );
    }

    #[test]
    fn test_page_id_missing_or_unparseable() {
        assert_eq!(page_id(r#"{"object": "page"}"#), None);
        assert_eq!(page_id("not json"), None);
        assert_eq!(page_id(r#"{"id": 7}"#), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let adapter = NotionAdapter::with_base_url("http://localhost:1234/v1/").unwrap();
        assert_eq!(adapter.pages_url(), "http://localhost:1234/v1/pages");
    }
}

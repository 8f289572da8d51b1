//! Application configuration. Notion credentials, webhook secret, bind address.

use serde::Deserialize;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bind host. Read from SESSION_SINK_HOST.
    #[serde(default)]
    pub host: Option<String>,

    /// Bind port. Read from SESSION_SINK_PORT.
    #[serde(default)]
    pub port: Option<u16>,

    // ─────────────────────────────────────────────────────────────────────────
    // Notion / Webhook Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Notion integration token. Read from NOTION_TOKEN.
    #[serde(default)]
    pub notion_token: Option<String>,

    /// Sessions database id, hyphens and URL wrapping allowed. Read from NOTION_SESSIONS_DB_ID.
    #[serde(default)]
    pub notion_sessions_db_id: Option<String>,

    /// Shared secret expected in X-Webhook-Secret. Read from WEBHOOK_SECRET.
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("SESSION_SINK"));
        if let Ok(path) = std::env::var("SESSION_SINK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Notion and webhook variables are read without prefix so existing deployments keep working
        if let Ok(s) = std::env::var("NOTION_TOKEN") {
            cfg.notion_token = Some(s);
        }
        if let Ok(s) = std::env::var("NOTION_SESSIONS_DB_ID") {
            cfg.notion_sessions_db_id = Some(s);
        }
        if let Ok(s) = std::env::var("WEBHOOK_SECRET") {
            cfg.webhook_secret = Some(s);
        }
        Ok(cfg)
    }

    /// Returns "host:port" to bind. Defaults to 0.0.0.0:8000.
    pub fn bind_addr_or_default(&self) -> String {
        format!(
            "{}:{}",
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT)
        )
    }

    /// Per-request settings handed to the ingest service. Empty values count as unset.
    pub fn ingest_settings(&self) -> IngestSettings {
        IngestSettings {
            notion_token: non_empty(&self.notion_token),
            notion_sessions_db_id: non_empty(&self.notion_sessions_db_id),
            webhook_secret: non_empty(&self.webhook_secret),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|s| !s.is_empty())
}

/// Settings the ingest handler validates on every request.
///
/// Kept as options: a missing token is a per-request 500, not a startup failure.
#[derive(Debug, Clone, Default)]
pub struct IngestSettings {
    pub notion_token: Option<String>,
    pub notion_sessions_db_id: Option<String>,
    pub webhook_secret: Option<String>,
}

impl IngestSettings {
    /// Returns true if inbound requests must present the shared secret.
    pub fn requires_secret(&self) -> bool {
        self.webhook_secret.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr_or_default(), "0.0.0.0:8000");

        let cfg = AppConfig {
            host: Some("127.0.0.1".into()),
            port: Some(9090),
            ..Default::default()
        };
        assert_eq!(cfg.bind_addr_or_default(), "127.0.0.1:9090");
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let cfg = AppConfig {
            notion_token: Some(String::new()),
            notion_sessions_db_id: Some("db".into()),
            webhook_secret: Some(String::new()),
            ..Default::default()
        };
        let settings = cfg.ingest_settings();
        assert_eq!(settings.notion_token, None);
        assert_eq!(settings.notion_sessions_db_id.as_deref(), Some("db"));
        assert!(!settings.requires_secret());
    }
}

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use sn_core::{CacheStore, Error, Result};

#[derive(Deserialize)]
struct CommandResponse {
    result: serde_json::Value,
}

/// Upstash-style Redis REST backend. Commands go over HTTPS as JSON
/// arrays, so no redis driver or persistent connection is needed.
pub struct UpstashCache {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl UpstashCache {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        if base_url.is_empty() || token.is_empty() {
            return Err(Error::Cache(
                "Upstash URL and token are required".to_string(),
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        let url = std::env::var("UPSTASH_REDIS_REST_URL")
            .map_err(|_| Error::Cache("UPSTASH_REDIS_REST_URL not set".to_string()))?;
        let token = std::env::var("UPSTASH_REDIS_REST_TOKEN")
            .map_err(|_| Error::Cache("UPSTASH_REDIS_REST_TOKEN not set".to_string()))?;
        Self::new(&url, &token)
    }

    async fn command(&self, command: &[&str]) -> Result<serde_json::Value> {
        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.token)
            .json(&command)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Cache(format!(
                "Upstash returned {}",
                response.status()
            )));
        }

        let body: CommandResponse = response.json().await?;
        Ok(body.result)
    }
}

impl std::fmt::Debug for UpstashCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstashCache")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl CacheStore for UpstashCache {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let result = self.command(&["GET", key]).await?;
        match result {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::String(s) => Ok(Some(s)),
            other => Err(Error::Cache(format!("unexpected GET reply: {}", other))),
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<()> {
        match ttl {
            Some(ttl) => {
                let secs = ttl.as_secs().max(1).to_string();
                self.command(&["SET", key, value, "EX", &secs]).await?;
            }
            None => {
                self.command(&["SET", key, value]).await?;
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.command(&["DEL", key]).await?;
        Ok(())
    }
}

use super::types::CreatePostRequest;
use super::Publisher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const TOKEN_ENV: &str = "MOLTBOOK_TOKEN";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(90);

pub struct MoltbookRest {
    client: Client,
    base_url: String,
    submolt: String,
}

impl MoltbookRest {
    pub fn new(base_url: &str, submolt: &str) -> Self {
        Self::with_timeout(base_url, submolt, REQUEST_TIMEOUT)
    }

    /// Client with a non-default request timeout. Production uses the fixed
    /// 90-second timeout via `new`; tests drive the timeout path with a
    /// short one.
    pub fn with_timeout(base_url: &str, submolt: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            submolt: submolt.to_string(),
        }
    }

    /// Read the bearer token fresh from the environment. Checked at post
    /// time rather than startup so the error surfaces before any network
    /// attempt but after the daily guard.
    fn bearer_token() -> Result<String> {
        let token = std::env::var(TOKEN_ENV).unwrap_or_default();
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("{} is not set", TOKEN_ENV);
        }
        Ok(token.to_string())
    }

    async fn send_once(
        &self,
        token: &str,
        payload: &CreatePostRequest,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}/posts", self.base_url))
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
    }
}

#[async_trait]
impl Publisher for MoltbookRest {
    async fn create_post(&self, title: &str, body: &str) -> Result<serde_json::Value> {
        let token = Self::bearer_token()?;
        let payload = CreatePostRequest {
            submolt: self.submolt.clone(),
            title: title.to_string(),
            content: body.to_string(),
        };

        // One identical retry on timeout only; any other transport error
        // or a second timeout propagates.
        let resp = match self.send_once(&token, &payload).await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => {
                tracing::warn!("create post timed out, retrying once");
                self.send_once(&token, &payload)
                    .await
                    .context("create post retry failed")?
            }
            Err(e) => return Err(e).context("create post request failed"),
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("create post failed ({}): {}", status, body);
        }

        resp.json()
            .await
            .context("failed to parse create post response")
    }
}

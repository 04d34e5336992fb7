pub mod rest;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;

/// Seam between the pipeline and the remote forum, so tests can run the
/// orchestrator without a network.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Submit a post and return the decoded API response verbatim.
    async fn create_post(&self, title: &str, body: &str) -> Result<serde_json::Value>;
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum number of post records retained; oldest entries are dropped first.
const MAX_LAST_POSTS: usize = 30;

/// Persistent state tracking which topics have been used and the most
/// recent posts. Lives in a small JSON file, rewritten after every
/// successful run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub used_topics: Vec<String>,
    #[serde(default)]
    pub last_posts: Vec<PostRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    pub date: String,
    pub title: String,
    pub topic: String,
}

/// How the memory record was obtained. A missing or malformed file is fully
/// absorbed into the empty default; the tag lets the caller log which case
/// occurred without changing that behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemorySource {
    Loaded,
    Missing,
    Malformed,
}

/// Read the memory file. Never fails: any read or parse problem yields the
/// empty default record with the matching `MemorySource` tag.
pub fn load(path: &Path) -> (Memory, MemorySource) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return (Memory::default(), MemorySource::Missing),
    };
    match serde_json::from_str(&content) {
        Ok(memory) => (memory, MemorySource::Loaded),
        Err(_) => (Memory::default(), MemorySource::Malformed),
    }
}

/// Write the memory record as pretty-printed JSON, overwriting the file.
/// Unlike `load`, a write failure propagates.
pub fn save(path: &Path, memory: &Memory) -> Result<()> {
    let json = serde_json::to_string_pretty(memory)
        .context("failed to serialize memory")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write memory file: {}", path.display()))?;
    Ok(())
}

impl Memory {
    /// Whether a post was already recorded for the given calendar date.
    pub fn posted_on(&self, date: &str) -> bool {
        self.last_posts.iter().any(|p| p.date == date)
    }

    /// Append a post record, keeping only the newest `MAX_LAST_POSTS`.
    pub fn record_post(&mut self, date: &str, title: &str, topic: &str) {
        self.last_posts.push(PostRecord {
            date: date.to_string(),
            title: title.to_string(),
            topic: topic.to_string(),
        });
        if self.last_posts.len() > MAX_LAST_POSTS {
            let excess = self.last_posts.len() - MAX_LAST_POSTS;
            self.last_posts.drain(..excess);
        }
    }
}

use crate::composer;
use crate::config::Config;
use crate::ethics;
use crate::memory::{self, MemorySource};
use crate::moltbook::Publisher;
use crate::topics;
use anyhow::Result;
use rand::Rng;

/// Result of one orchestrator pass.
#[derive(Debug)]
pub enum RunOutcome {
    Posted {
        title: String,
        response: serde_json::Value,
    },
    /// The daily guard fired: a post for today already exists, nothing was
    /// composed or published and the memory file was left untouched.
    AlreadyPostedToday,
}

/// Today's calendar date in the process-local timezone, ISO formatted.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// One linear pass: load memory, daily guard, read ethics source, select
/// topic and guideline, compose, publish, persist.
///
/// Memory is only written after a successful publish; a failed publish
/// therefore does not consume a topic.
pub async fn run(
    config: &Config,
    publisher: &dyn Publisher,
    rng: &mut impl Rng,
) -> Result<RunOutcome> {
    let (mut memory, source) = memory::load(&config.memory_path);
    match source {
        MemorySource::Loaded => {}
        MemorySource::Missing => {
            tracing::debug!(path = %config.memory_path.display(), "memory file absent, starting empty");
        }
        MemorySource::Malformed => {
            tracing::warn!(path = %config.memory_path.display(), "memory file malformed, resetting to empty");
        }
    }

    let date = today();
    if memory.posted_on(&date) {
        tracing::info!(%date, "already posted today, skipping");
        return Ok(RunOutcome::AlreadyPostedToday);
    }

    let ethics_text = ethics::read(&config.ethics_path)?;
    let guideline_lines = ethics::extract_lines(&ethics_text);

    let topic = topics::pick(&mut memory, rng);
    let guideline = ethics::pick(&guideline_lines, rng);
    let draft = composer::build(&topic, &guideline, &date);

    let response = publisher.create_post(&draft.title, &draft.body).await?;

    memory.record_post(&date, &draft.title, &topic);
    memory::save(&config.memory_path, &memory)?;

    Ok(RunOutcome::Posted {
        title: draft.title,
        response,
    })
}

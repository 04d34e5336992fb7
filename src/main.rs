use anyhow::Result;
use moltbook_poster::config::Config;
use moltbook_poster::moltbook::rest::MoltbookRest;
use moltbook_poster::pipeline::{self, RunOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("moltbook_poster=info")
        .init();

    // Load saved token from .env (real env vars take precedence)
    Config::load_env_file();
    let config = Config::from_env();

    let publisher = MoltbookRest::new(&config.base_url, &config.submolt);
    let mut rng = rand::thread_rng();

    match pipeline::run(&config, &publisher, &mut rng).await? {
        RunOutcome::Posted { title, response } => {
            println!("Posted: {}", title);
            println!("Result: {}", response);
        }
        RunOutcome::AlreadyPostedToday => {
            println!("Already posted today; nothing to do.");
        }
    }

    Ok(())
}

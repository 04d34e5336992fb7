use std::path::{Path, PathBuf};

const ENV_FILE: &str = ".env";

pub const BASE_URL_ENV: &str = "MOLTBOOK_BASE";
pub const SUBMOLT_ENV: &str = "SUBMOLT";

const DEFAULT_BASE_URL: &str = "https://www.moltbook.com/api/v1";
const DEFAULT_SUBMOLT: &str = "human-centred-tech";
const DEFAULT_MEMORY_PATH: &str = "memory.json";
const DEFAULT_ETHICS_PATH: &str = "ethics.md";

/// Process configuration, built once at startup and passed by parameter.
///
/// The only ambient environment read outside this bootstrap is the auth
/// token, which the publisher re-reads fresh at post time.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub submolt: String,
    pub memory_path: PathBuf,
    pub ethics_path: PathBuf,
}

impl Config {
    /// Build configuration from environment variables, falling back to the
    /// public Moltbook endpoint and the fixed relative file paths.
    pub fn from_env() -> Self {
        Self {
            base_url: env_or(BASE_URL_ENV, DEFAULT_BASE_URL),
            submolt: env_or(SUBMOLT_ENV, DEFAULT_SUBMOLT),
            memory_path: PathBuf::from(DEFAULT_MEMORY_PATH),
            ethics_path: PathBuf::from(DEFAULT_ETHICS_PATH),
        }
    }

    /// Load .env file into process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let path = Path::new(ENV_FILE);
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return,
        };
        // Strip BOM if present (common on Windows-created files)
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for line in content.lines() {
            let line = line.trim().trim_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

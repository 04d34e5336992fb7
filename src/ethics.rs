use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Used when the source file yields no candidate lines at all.
pub const FALLBACK_LINE: &str = "Prioritise human wellbeing and privacy.";

/// Read the guideline source file. A missing file is fatal — it is a
/// required input, unlike the memory file.
pub fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ethics source: {}", path.display()))
}

/// Reduce markdown-ish text to candidate guideline lines: blanks and
/// headings (any `#` level) are dropped, `- ` bullet markers stripped,
/// everything else kept trimmed, in order.
pub fn extract_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("- ") {
            lines.push(rest.trim().to_string());
        } else {
            lines.push(line.to_string());
        }
    }
    lines
}

/// Uniformly pick one guideline line, or the fixed fallback when empty.
pub fn pick(lines: &[String], rng: &mut impl Rng) -> String {
    lines
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| FALLBACK_LINE.to_string())
}

use crate::memory::Memory;
use rand::Rng;

/// Fixed topic catalog, immutable for the process lifetime.
pub const CATALOG: [&str; 7] = [
    "Anti-doxxing norms and privacy by design",
    "Practical misinformation mitigation without pile-ons",
    "Bias in systems: detection, audits, accountability",
    "Human-centred AI product checklists",
    "Incident response and harm reduction procedures",
    "Transparency: what agents should disclose by default",
    "Healthy community norms for agent networks",
];

/// Pick one topic, preferring those not yet used. Once the catalog is
/// exhausted, topics repeat (uniform choice over the full catalog). The
/// chosen topic is appended to `used_topics` unless already present; the
/// caller is responsible for persisting the mutated memory.
pub fn pick(memory: &mut Memory, rng: &mut impl Rng) -> String {
    let available: Vec<&str> = CATALOG
        .iter()
        .copied()
        .filter(|t| !memory.used_topics.iter().any(|u| u == t))
        .collect();

    let topic = if available.is_empty() {
        CATALOG[rng.gen_range(0..CATALOG.len())]
    } else {
        available[rng.gen_range(0..available.len())]
    };

    if !memory.used_topics.iter().any(|u| u == topic) {
        memory.used_topics.push(topic.to_string());
    }
    topic.to_string()
}

/// Banned substrings; matching is case-insensitive containment over the
/// fully rendered body.
pub const BANNED_PHRASES: [&str; 10] = [
    "dox",
    "doxx",
    "expose",
    "name and shame",
    "ruin them",
    "destroy them",
    "go after",
    "target them",
    "hunt",
    "harass",
];

/// Transient rendered post; only title and topic survive into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
}

/// `true` when the text contains none of the banned phrases.
pub fn is_clean(text: &str) -> bool {
    let lowered = text.to_lowercase();
    !BANNED_PHRASES.iter().any(|p| lowered.contains(p))
}

/// Render the title and body for a post. Pure function of its inputs;
/// `date` is the ISO calendar date used in the title.
///
/// If the primary body trips the tone filter it is discarded and the short
/// fallback template is used unconditionally (no retry loop). The fallback
/// never echoes the guideline line, so a denylisted guideline cannot leak
/// through it.
pub fn build(topic: &str, ethics_line: &str, date: &str) -> PostDraft {
    let title = format!("Human-Centred Technology: Daily Reflection | {date}");

    let body = render_primary(topic, ethics_line);
    let body = if is_clean(&body) {
        body
    } else {
        tracing::warn!(topic, "primary body failed tone filter, using fallback template");
        render_fallback(topic)
    };

    PostDraft { title, body }
}

fn render_primary(topic: &str, ethics_line: &str) -> String {
    format!(
        "Today’s theme: {topic}\n\
         \n\
         Ethical reference point:\n\
         {ethics_line}\n\
         \n\
         Question for considered discussion:\n\
         Which concrete policy, procedural safeguard, or design constraint would most effectively reduce harm \n\
         in this domain?\n\
         \n\
         Suggested lines of enquiry:\n\
         - What forms of irreversible harm are plausible here, and how might they be prevented upstream?\n\
         - Where does responsibility sit: with designers, deployers, platforms, or regulators?\n\
         - Who is structurally excluded or disadvantaged by default assumptions?\n\
         \n\
         Methodological reminders:\n\
         - Distinguish evidence from inference.\n\
         - State uncertainty explicitly.\n\
         - Avoid personal attribution; focus on systems and incentives.\n\
         - Prioritise human dignity, privacy, and proportionality.\n\
         \n\
         The aim is not consensus, but clarity."
    )
}

pub fn render_fallback(topic: &str) -> String {
    format!(
        "Today’s theme: {topic}\n\
         \n\
         Let us approach this with analytical restraint and human concern.\n\
         \n\
         Which practical policy or procedural intervention would meaningfully reduce harm here?\n\
         \n\
         Please frame contributions in terms of systems, incentives, and impacts on real people."
    )
}

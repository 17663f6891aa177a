use std::sync::LazyLock;

use regex::Regex;

/// Cleaned lines this short are labels or fragments, not a summary.
const MIN_LENGTH: usize = 30;
const MAX_LENGTH: usize = 160;
const TRUNCATED_LENGTH: usize = 157;

static BOLD_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^*]+\*\*$").expect("valid regex"));
static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").expect("valid regex"));

/// Synthesizes an excerpt from the first prose line of a Markdown body.
///
/// Headings, images, rules and bold-only label lines are skipped. Emphasis markers are removed and links are
/// reduced to their text. Returns an empty string when no line qualifies.
pub fn auto_excerpt(body: &str) -> String {
    for line in body.lines() {
        let trimmed = line.trim();
        if starts_with_marker(trimmed) || BOLD_LABEL.is_match(trimmed) {
            continue;
        }

        let clean = trimmed.replace("**", "").replace('*', "");
        let clean = LINK.replace_all(&clean, "$1");
        // Removing emphasis can expose a marker, e.g. `**#1 rule:** ...`.
        let clean = clean.trim();
        if starts_with_marker(clean) {
            continue;
        }

        let length = clean.chars().count();
        if length > MIN_LENGTH {
            if length > MAX_LENGTH {
                let mut truncated: String = clean.chars().take(TRUNCATED_LENGTH).collect();
                truncated.push_str("...");
                return truncated;
            }
            return clean.to_string();
        }
    }

    String::new()
}

fn starts_with_marker(line: &str) -> bool {
    line.is_empty() || line.starts_with('#') || line.starts_with('!') || line.starts_with("---")
}

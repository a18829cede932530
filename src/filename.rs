use std::sync::LazyLock;

use regex::Regex;

static DISALLOWED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

const MAX_SEGMENT: usize = 50;

/// `{company}-{title}.md` with each part reduced to ASCII letters, digits and
/// hyphens. Total: any input gives a filename.
pub fn sanitize(company: &str, title: &str) -> String {
    format!("{}-{}.md", safe_segment(company), safe_segment(title))
}

fn safe_segment(s: &str) -> String {
    let kept = DISALLOWED_RE.replace_all(s, "");
    let hyphenated = WHITESPACE_RE.replace_all(&kept, "-");
    // Only ASCII is left, so byte and char counts agree.
    hyphenated.chars().take(MAX_SEGMENT).collect()
}

//! Text normalization shared by all three scorers.

use regex::Regex;
use std::sync::LazyLock;

static RE_BANGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!{2,}").unwrap());
static RE_QUESTIONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?{2,}").unwrap());

/// Lower-case, trim, collapse `!!`/`??` runs and cap any character
/// repeated three or more times at two ("sooooo" -> "soo").
///
/// Empty or whitespace-only input yields an empty string.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let lowered = lowered.trim();
    let collapsed = RE_BANGS.replace_all(lowered, "!");
    let collapsed = RE_QUESTIONS.replace_all(&collapsed, "?");

    cap_repeats(&collapsed)
}

/// Runs of 3+ identical characters become exactly 2. Newlines are left alone.
fn cap_repeats(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 || c == '\n' {
            out.push(c);
        }
    }
    out
}

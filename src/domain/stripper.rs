//! Tag stripping

use regex::Regex;
use std::sync::OnceLock;

/// Non-greedy match from `<` to the next `>` on the same line.
fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<.*?>").unwrap())
}

/// Result of stripping tags from a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult {
    pub content: String,
    pub removed: usize,
}

impl StripResult {
    pub fn is_unchanged(&self) -> bool {
        self.removed == 0
    }
}

/// Remove every tag-like span from `text`, scanning left to right.
///
/// Matching is naive: an attribute value containing a literal `>` ends the
/// match early and leaves the rest of the tag in the output, and a `<` with
/// no `>` after it on the same line is kept as is.
pub fn strip_tags(text: &str) -> StripResult {
    let regex = tag_regex();
    let removed = regex.find_iter(text).count();
    if removed == 0 {
        return StripResult {
            content: text.to_string(),
            removed,
        };
    }

    StripResult {
        content: regex.replace_all(text, "").into_owned(),
        removed,
    }
}

// src/util/text.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `.` does not cross newlines, so each comment is matched within one line
    static ref HTML_COMMENT_REGEX: Regex = Regex::new(r"<!--.*-->\n?")
        .expect("Failed to compile HTML comment regex");
}

/// Remove HTML comments from note text.
///
/// This function:
/// 1. Finds every `<!-- ... -->` span on a single line
/// 2. Removes it together with one directly following newline
///
/// Spans are greedy, so two comments on the same line are removed along with
/// everything between them.
///
/// # Examples
///
/// ```
/// use flashcards_llm::util::text::strip_html_comments;
///
/// let note = "# Title\n<!--hidden-->\nVisible";
/// assert_eq!(strip_html_comments(note), "# Title\nVisible");
/// ```
pub fn strip_html_comments(text: &str) -> String {
    HTML_COMMENT_REGEX.replace_all(text, "").into_owned()
}

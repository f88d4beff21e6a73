//! Query highlighting, excerpts and markup stripping for session search.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

/// Characters kept on each side of the first content match.
pub const DEFAULT_EXCERPT_RADIUS: usize = 50;

const ELLIPSIS: &str = "...";

/// A run of display text, highlighted when it matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), highlighted: false }
    }

    fn marked(text: &str) -> Self {
        Self { text: text.to_string(), highlighted: true }
    }
}

/// Case-insensitive literal matcher built from a user query.
///
/// The query is escaped before compiling, so regex metacharacters typed by
/// the user (`+`, `(`, `.`) match themselves.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    /// Only blankness is judged on the trimmed query; the pattern keeps any
    /// surrounding spaces the user typed.
    pub fn new(query: &str) -> Self {
        let pattern = if query.trim().is_empty() {
            None
        } else {
            RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build().ok()
        };
        Self { pattern }
    }

    /// A blank query matches nothing and highlights nothing.
    pub fn is_blank(&self) -> bool {
        self.pattern.is_none()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    /// Splits `text` into alternating plain and highlighted segments.
    /// Concatenating the segment texts gives back `text` unchanged.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::plain(&text[cursor..found.start()]));
            }
            segments.push(Segment::marked(found.as_str()));
            cursor = found.end();
        }
        if cursor < text.len() || segments.is_empty() {
            segments.push(Segment::plain(&text[cursor..]));
        }
        segments
    }

    /// Up to `radius` characters either side of the first match. `None`
    /// when nothing matches.
    pub fn excerpt(&self, text: &str, radius: usize) -> Option<Excerpt> {
        let found = self.pattern.as_ref()?.find(text)?;

        let chars: Vec<char> = text.chars().collect();
        let match_start = text[..found.start()].chars().count();
        let match_end = match_start + found.as_str().chars().count();

        let from = match_start.saturating_sub(radius);
        let to = (match_end + radius).min(chars.len());

        Some(Excerpt {
            body: chars[from..to].iter().collect(),
            cut_start: from > 0,
            cut_end: to < chars.len(),
        })
    }

    /// Segments of an excerpt. Only the body is matched; the ellipses are
    /// always plain.
    pub fn excerpt_segments(&self, excerpt: &Excerpt) -> Vec<Segment> {
        let mut segments = Vec::new();
        if excerpt.cut_start {
            segments.push(Segment::plain(ELLIPSIS));
        }
        segments.extend(self.segments(&excerpt.body));
        if excerpt.cut_end {
            segments.push(Segment::plain(ELLIPSIS));
        }
        segments
    }
}

/// A window of text around a match. Renders with `...` on each cut side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub body: String,
    pub cut_start: bool,
    pub cut_end: bool,
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let before = if self.cut_start { ELLIPSIS } else { "" };
        let after = if self.cut_end { ELLIPSIS } else { "" };
        write!(f, "{}{}{}", before, self.body, after)
    }
}

fn block_tags() -> &'static Regex {
    static BLOCK_TAGS: OnceLock<Regex> = OnceLock::new();
    BLOCK_TAGS.get_or_init(|| {
        Regex::new(r"(?i)</?(p|div|br|li|ul|ol|h[1-6]|tr|td|th|blockquote|pre)\b[^>]*>").expect("valid block tag pattern")
    })
}

fn any_tag() -> &'static Regex {
    static ANY_TAG: OnceLock<Regex> = OnceLock::new();
    ANY_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"))
}

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Reduces rich-text session content to searchable plain text.
///
/// Block-level tags become spaces, inline tags disappear, the common HTML
/// entities are decoded and runs of whitespace collapse to one space.
pub fn strip_markup(html: &str) -> String {
    let text = block_tags().replace_all(html, " ");
    let text = any_tag().replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    whitespace().replace_all(&text, " ").trim().to_string()
}

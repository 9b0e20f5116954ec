//! Text canonicalization shared by queries and knowledge-base entries.
//!
//! Normalization lowercases, replaces every character that is not a Unicode
//! letter, number, or whitespace with a space, collapses whitespace runs, and
//! trims. The result is what the matcher compares; raw text never is.
//!
//! ```
//! use faqroute::normalize::normalize;
//!
//! assert_eq!(normalize("  What are the LIBRARY hours?! "), "what are the library hours");
//! ```


use std::sync::LazyLock;

use regex::Regex;

static SYMBOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]").expect("valid regex"));

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Canonicalizes `text` for comparison. Total and idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = SYMBOL_RE.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Like [`normalize`], but absent input yields the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

/// Splits already-normalized text into tokens, dropping empty ones.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}

/// A query after normalization, kept together with its tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    text: String,
    tokens: Vec<String>,
}

impl NormalizedQuery {
    pub fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let tokens = tokenize(&text).into_iter().map(str::to_string).collect();
        Self { text, tokens }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns `true` if `phrase`'s tokens appear as a contiguous run of query tokens.
    ///
    /// `phrase` must already be normalized.
    pub fn contains_words(&self, phrase: &str) -> bool {
        if phrase.is_empty() {
            return false;
        }
        let padded_query = format!(" {} ", self.text);
        let padded_phrase = format!(" {} ", phrase);
        padded_query.contains(&padded_phrase)
    }
}

//! Knowledge-base lookup.
//!
//! Given raw user text and a [`Corpus`], pick the entry that best explains the
//! query, or nothing. The score of an entry is a plain sum:
//!
//! | signal | weight (default) |
//! |---|---|
//! | normalized keyword contained in the normalized query | 3 |
//! | query token (>= 3 chars) contained in the normalized question | 1 |
//! | query token (>= 3 chars) contained in the normalized answer | 1 |
//!
//! The highest score wins, ties go to the earlier entry, and the winner is
//! only returned if it reaches the threshold (default 3). One keyword hit is
//! enough on its own; token overlaps alone need three hits.
//!
//! # Substring Keywords
//!
//! With the default [`KeywordMatch::Substring`] a keyword matches anywhere in
//! the query text, so `bus` also matches `business`. Use
//! [`KeywordMatch::WholeWords`] to require whole query tokens.

pub mod config;
pub mod error;
pub mod matcher;
pub mod types;


pub use config::{KeywordMatch, MatchConfig};
pub use error::MatchConfigError;
pub use matcher::Matcher;
pub use types::{AnswerSource, MatchOutcome, MatchResult, ScoredEntry};

use crate::corpus::Corpus;

/// Looks `query` up in `corpus` with the default [`MatchConfig`].
pub fn find_best_match<'c>(query: &str, corpus: &'c Corpus) -> Option<MatchResult<'c>> {
    Matcher::default().find_best_match(query, corpus)
}

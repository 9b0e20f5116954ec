//! faqroute library crate (used by the server binary and integration tests).
//!
//! Deterministic knowledge-base routing: answer a free-text query from a
//! small curated corpus when the corpus is confident, and leave it to a
//! generative model otherwise.
//!
//! # Public API Surface
//!
//! ## Core
//! - [`normalize`](normalize::normalize), [`NormalizedQuery`] - text canonicalization
//! - [`Corpus`], [`KnowledgeEntry`] - the immutable knowledge base
//! - [`find_best_match`], [`Matcher`], [`MatchConfig`], [`MatchResult`] - scoring
//!
//! ## Serving
//! - [`Config`], [`ConfigError`] - environment-backed server configuration
//! - [`FallbackProvider`], [`GenaiProvider`], [`MockProvider`] - generative fallback
//! - [`gateway`] - Axum router enforcing "knowledge base first"
//!
//! ```
//! use faqroute::{Corpus, KnowledgeEntry, find_best_match};
//!
//! let corpus = Corpus::new(vec![
//!     KnowledgeEntry::new("A", "What are library hours?", "The library opens 8am to 10pm.")
//!         .with_keywords(["library hours"]),
//! ])
//! .unwrap();
//!
//! let hit = find_best_match("What are the library hours today?", &corpus).unwrap();
//! assert_eq!(hit.entry.id, "A");
//! assert!(find_best_match("where is the gym", &corpus).is_none());
//! ```

pub mod config;
pub mod constants;
pub mod corpus;
pub mod gateway;
pub mod hashing;
pub mod matching;
pub mod normalize;
pub mod provider;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_ANSWER_WEIGHT, DEFAULT_KEYWORD_WEIGHT, DEFAULT_MATCH_THRESHOLD, DEFAULT_MIN_TOKEN_LEN,
    DEFAULT_QUESTION_WEIGHT, FAQROUTE_SOURCE_HEADER,
};
pub use corpus::{Corpus, CorpusError, CorpusResult, KnowledgeEntry};
pub use hashing::{format_fingerprint, hash_to_u64};
pub use matching::{
    AnswerSource, KeywordMatch, MatchConfig, MatchConfigError, MatchOutcome, MatchResult,
    Matcher, ScoredEntry, find_best_match,
};
pub use normalize::{NormalizedQuery, normalize, normalize_opt, tokenize};
pub use provider::{FallbackProvider, GenaiProvider, MockProvider, ProviderError};

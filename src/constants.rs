//! Cross-cutting, shared constants.
//!
//! # Scoring Invariants
//!
//! The default weights are chosen so that a single keyword hit reaches the
//! threshold on its own, while plain token overlaps (worth 1 each) need at
//! least three independent hits. If you change one of them, re-check that
//! relationship:
//!
//! ```text
//! DEFAULT_KEYWORD_WEIGHT >= DEFAULT_MATCH_THRESHOLD
//! DEFAULT_QUESTION_WEIGHT + DEFAULT_ANSWER_WEIGHT < DEFAULT_MATCH_THRESHOLD
//! ```

/// Score added when a normalized keyword is contained in the normalized query.
pub const DEFAULT_KEYWORD_WEIGHT: u32 = 3;

/// Score added when a query token is contained in the normalized question.
pub const DEFAULT_QUESTION_WEIGHT: u32 = 1;

/// Score added when a query token is contained in the normalized answer.
pub const DEFAULT_ANSWER_WEIGHT: u32 = 1;

/// Query tokens shorter than this (in characters) are ignored.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Minimum score required to answer from the knowledge base.
pub const DEFAULT_MATCH_THRESHOLD: u32 = 3;

/// Response header carrying the answer source (or error status).
pub const FAQROUTE_SOURCE_HEADER: &str = "X-Faqroute-Source";
pub const FAQROUTE_STATUS_HEALTHY: &str = "healthy";
pub const FAQROUTE_STATUS_READY: &str = "ready";
pub const FAQROUTE_STATUS_NOT_READY: &str = "not_ready";

/// Default model used for the generative fallback.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default name of the environment variable holding the provider secret.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default location of the knowledge-base document.
pub const DEFAULT_CORPUS_PATH: &str = "./data/faq.json";

const _: () = assert!(DEFAULT_KEYWORD_WEIGHT >= DEFAULT_MATCH_THRESHOLD);
const _: () = assert!(DEFAULT_QUESTION_WEIGHT + DEFAULT_ANSWER_WEIGHT < DEFAULT_MATCH_THRESHOLD);

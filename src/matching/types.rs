use serde::Serialize;

use crate::corpus::KnowledgeEntry;

/// Best entry for a query together with its score.
///
/// Only ever produced when `score` reaches the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: u32,
}

/// Score of one entry, as reported by [`Matcher::score_all`](super::Matcher::score_all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredEntry<'a> {
    /// Position in the corpus.
    pub index: usize,
    pub entry: &'a KnowledgeEntry,
    pub score: u32,
}

/// Where an answer handed back to the caller came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    KnowledgeBase,
    Generative,
}

impl AnswerSource {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerSource::KnowledgeBase => "knowledge_base",
            AnswerSource::Generative => "generative",
        }
    }

    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            AnswerSource::KnowledgeBase => "KNOWLEDGE_BASE",
            AnswerSource::Generative => "GENERATIVE",
        }
    }
}

impl std::fmt::Display for AnswerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}

/// Why a lookup did or did not produce a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Best entry reached the threshold.
    Matched {
        score: u32,
    },
    /// Best entry stayed below the threshold (`0` if nothing scored at all).
    BelowThreshold {
        top_score: u32,
    },
    /// Query normalized to the empty string.
    EmptyQuery,
    EmptyCorpus,
}

impl MatchOutcome {
    /// Maps the outcome to the source the caller must answer from.
    pub fn to_answer_source(&self) -> AnswerSource {
        match self {
            MatchOutcome::Matched { .. } => AnswerSource::KnowledgeBase,
            MatchOutcome::BelowThreshold { .. }
            | MatchOutcome::EmptyQuery
            | MatchOutcome::EmptyCorpus => AnswerSource::Generative,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchOutcome::Matched { .. })
    }

    pub fn score(&self) -> Option<u32> {
        match self {
            MatchOutcome::Matched { score }
            | MatchOutcome::BelowThreshold { top_score: score } => Some(*score),
            MatchOutcome::EmptyQuery | MatchOutcome::EmptyCorpus => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchOutcome::Matched { .. } => "MATCHED",
            MatchOutcome::BelowThreshold { .. } => "BELOW_THRESHOLD",
            MatchOutcome::EmptyQuery => "EMPTY_QUERY",
            MatchOutcome::EmptyCorpus => "EMPTY_CORPUS",
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Matched { score } => write!(f, "MATCHED (score: {})", score),
            MatchOutcome::BelowThreshold { top_score } => {
                write!(f, "BELOW_THRESHOLD (top_score: {})", top_score)
            }
            MatchOutcome::EmptyQuery => write!(f, "EMPTY_QUERY"),
            MatchOutcome::EmptyCorpus => write!(f, "EMPTY_CORPUS"),
        }
    }
}

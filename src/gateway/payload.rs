use serde::Serialize;

use crate::matching::{AnswerSource, MatchResult};

/// Body returned by `POST /v1/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub source: AnswerSource,

    /// Id of the knowledge-base entry that answered, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_id: Option<String>,

    pub reply: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl ChatReply {
    pub fn from_match(result: &MatchResult<'_>) -> Self {
        Self {
            source: AnswerSource::KnowledgeBase,
            matched_id: Some(result.entry.id.clone()),
            reply: result.entry.answer.clone(),
            score: Some(result.score),
        }
    }

    pub fn generative(reply: String) -> Self {
        Self {
            source: AnswerSource::Generative,
            matched_id: None,
            reply,
            score: None,
        }
    }
}

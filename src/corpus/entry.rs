use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

/// One question/answer record of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique identifier, reported as provenance on a match.
    pub id: String,
    #[serde(default)]
    pub question: String,
    /// Returned verbatim on a match.
    pub answer: String,
    /// Short phrases treated as strong signals, in document order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KnowledgeEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            keywords: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Normalized text of an entry, computed once when the corpus is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedEntry {
    pub question: String,
    pub answer: String,
    /// Non-empty normalized keywords only.
    pub keywords: Vec<String>,
}

impl NormalizedEntry {
    pub fn from_entry(entry: &KnowledgeEntry) -> Self {
        Self {
            question: normalize(&entry.question),
            answer: normalize(&entry.answer),
            keywords: entry
                .keywords
                .iter()
                .map(|kw| normalize(kw))
                .filter(|kw| !kw.is_empty())
                .collect(),
        }
    }
}

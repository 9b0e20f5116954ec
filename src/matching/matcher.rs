use tracing::{debug, trace};

use crate::corpus::entry::NormalizedEntry;
use crate::corpus::{Corpus, KnowledgeEntry};
use crate::normalize::NormalizedQuery;

use super::config::{KeywordMatch, MatchConfig};
use super::error::MatchConfigError;
use super::types::{MatchOutcome, MatchResult, ScoredEntry};

/// Additive keyword/token scorer over a [`Corpus`].
///
/// Stateless apart from its configuration; share freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Result<Self, MatchConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn threshold(&self) -> u32 {
        self.config.threshold
    }

    /// Scores a single entry, normalizing its text on the fly.
    pub fn score_entry(&self, query: &NormalizedQuery, entry: &KnowledgeEntry) -> u32 {
        self.score_normalized(query, &NormalizedEntry::from_entry(entry))
    }

    pub(crate) fn score_normalized(&self, query: &NormalizedQuery, entry: &NormalizedEntry) -> u32 {
        let mut score: u32 = 0;

        for keyword in &entry.keywords {
            let hit = match self.config.keyword_match {
                KeywordMatch::Substring => query.text().contains(keyword.as_str()),
                KeywordMatch::WholeWords => query.contains_words(keyword),
            };
            if hit {
                score = score.saturating_add(self.config.keyword_weight);
            }
        }

        for token in query.tokens() {
            if token.encode_utf16().count() < self.config.min_token_len {
                continue;
            }
            if entry.question.contains(token.as_str()) {
                score = score.saturating_add(self.config.question_weight);
            }
            if entry.answer.contains(token.as_str()) {
                score = score.saturating_add(self.config.answer_weight);
            }
        }

        score
    }

    /// Returns the best entry for `query` if its score reaches the threshold.
    ///
    /// Ties go to the entry that comes first in the corpus.
    pub fn find_best_match<'c>(&self, query: &str, corpus: &'c Corpus) -> Option<MatchResult<'c>> {
        self.find_best_match_with_outcome(query, corpus).0
    }

    pub fn find_best_match_with_outcome<'c>(
        &self,
        query: &str,
        corpus: &'c Corpus,
    ) -> (Option<MatchResult<'c>>, MatchOutcome) {
        let query = NormalizedQuery::new(query);
        if query.is_empty() {
            debug!("Query normalized to empty - no match");
            return (None, MatchOutcome::EmptyQuery);
        }
        if corpus.is_empty() {
            debug!("Corpus is empty - no match");
            return (None, MatchOutcome::EmptyCorpus);
        }

        let mut best: Option<&KnowledgeEntry> = None;
        let mut best_score: u32 = 0;

        for (entry, normalized) in corpus.indexed() {
            let score = self.score_normalized(&query, normalized);
            trace!(id = %entry.id, score = score, "Scored entry");

            if score > best_score {
                best_score = score;
                best = Some(entry);
            }
        }

        match best {
            Some(entry) if best_score >= self.config.threshold => {
                debug!(
                    id = %entry.id,
                    score = best_score,
                    threshold = self.config.threshold,
                    "Knowledge base match"
                );
                (
                    Some(MatchResult {
                        entry,
                        score: best_score,
                    }),
                    MatchOutcome::Matched { score: best_score },
                )
            }
            _ => {
                debug!(
                    top_score = best_score,
                    threshold = self.config.threshold,
                    "Best entry below threshold - no match"
                );
                (
                    None,
                    MatchOutcome::BelowThreshold {
                        top_score: best_score,
                    },
                )
            }
        }
    }

    /// Scores every entry, in corpus order. An empty query scores nothing.
    pub fn score_all<'c>(&self, query: &str, corpus: &'c Corpus) -> Vec<ScoredEntry<'c>> {
        let query = NormalizedQuery::new(query);
        if query.is_empty() {
            return Vec::new();
        }

        corpus
            .indexed()
            .enumerate()
            .map(|(index, (entry, normalized))| ScoredEntry {
                index,
                entry,
                score: self.score_normalized(&query, normalized),
            })
            .collect()
    }
}

use std::str::FromStr;

use crate::constants::{
    DEFAULT_ANSWER_WEIGHT, DEFAULT_KEYWORD_WEIGHT, DEFAULT_MATCH_THRESHOLD, DEFAULT_MIN_TOKEN_LEN,
    DEFAULT_QUESTION_WEIGHT,
};

use super::error::MatchConfigError;

/// How an entry keyword is located in the normalized query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMatch {
    /// Plain substring containment. `bus` matches inside `business`.
    #[default]
    Substring,
    /// Keyword tokens must appear as a contiguous run of query tokens.
    WholeWords,
}

impl KeywordMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordMatch::Substring => "substring",
            KeywordMatch::WholeWords => "whole_words",
        }
    }
}

impl FromStr for KeywordMatch {
    type Err = MatchConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(KeywordMatch::Substring),
            "whole_words" | "whole-words" | "words" => Ok(KeywordMatch::WholeWords),
            _ => Err(MatchConfigError::UnknownKeywordMatch {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for KeywordMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights and cut-offs used by the [`Matcher`](super::Matcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Added once per keyword found in the query. Default: `3`.
    pub keyword_weight: u32,

    /// Added once per qualifying query token found in the question. Default: `1`.
    pub question_weight: u32,

    /// Added once per qualifying query token found in the answer. Default: `1`.
    pub answer_weight: u32,

    /// Query tokens shorter than this, in UTF-16 code units, are ignored. Default: `3`.
    pub min_token_len: usize,

    /// Minimum best score for a match. Default: `3`.
    pub threshold: u32,

    /// Keyword location strategy. Default: [`KeywordMatch::Substring`].
    pub keyword_match: KeywordMatch,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            keyword_weight: DEFAULT_KEYWORD_WEIGHT,
            question_weight: DEFAULT_QUESTION_WEIGHT,
            answer_weight: DEFAULT_ANSWER_WEIGHT,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            threshold: DEFAULT_MATCH_THRESHOLD,
            keyword_match: KeywordMatch::Substring,
        }
    }
}

impl MatchConfig {
    const ENV_KEYWORD_WEIGHT: &'static str = "FAQROUTE_KEYWORD_WEIGHT";
    const ENV_QUESTION_WEIGHT: &'static str = "FAQROUTE_QUESTION_WEIGHT";
    const ENV_ANSWER_WEIGHT: &'static str = "FAQROUTE_ANSWER_WEIGHT";
    const ENV_MIN_TOKEN_LEN: &'static str = "FAQROUTE_MIN_TOKEN_LEN";
    const ENV_THRESHOLD: &'static str = "FAQROUTE_MATCH_THRESHOLD";
    const ENV_KEYWORD_MATCH: &'static str = "FAQROUTE_KEYWORD_MATCH";

    pub fn with_keyword_weight(mut self, weight: u32) -> Self {
        self.keyword_weight = weight;
        self
    }

    pub fn with_question_weight(mut self, weight: u32) -> Self {
        self.question_weight = weight;
        self
    }

    pub fn with_answer_weight(mut self, weight: u32) -> Self {
        self.answer_weight = weight;
        self
    }

    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_keyword_match(mut self, mode: KeywordMatch) -> Self {
        self.keyword_match = mode;
        self
    }

    pub fn validate(&self) -> Result<(), MatchConfigError> {
        if self.keyword_weight == 0 {
            return Err(MatchConfigError::ZeroKeywordWeight);
        }
        if self.threshold == 0 {
            return Err(MatchConfigError::ZeroThreshold);
        }
        Ok(())
    }

    /// Reads `FAQROUTE_*` overrides on top of the defaults and validates the result.
    pub fn from_env() -> Result<Self, MatchConfigError> {
        let defaults = Self::default();

        let config = Self {
            keyword_weight: parse_from_env(Self::ENV_KEYWORD_WEIGHT, defaults.keyword_weight)?,
            question_weight: parse_from_env(Self::ENV_QUESTION_WEIGHT, defaults.question_weight)?,
            answer_weight: parse_from_env(Self::ENV_ANSWER_WEIGHT, defaults.answer_weight)?,
            min_token_len: parse_from_env(Self::ENV_MIN_TOKEN_LEN, defaults.min_token_len)?,
            threshold: parse_from_env(Self::ENV_THRESHOLD, defaults.threshold)?,
            keyword_match: match non_empty_env(Self::ENV_KEYWORD_MATCH) {
                Some(value) => value.parse()?,
                None => defaults.keyword_match,
            },
        };

        config.validate()?;
        Ok(config)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_from_env<T: FromStr>(name: &'static str, default: T) -> Result<T, MatchConfigError> {
    match non_empty_env(name) {
        Some(value) => value
            .parse()
            .map_err(|_| MatchConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

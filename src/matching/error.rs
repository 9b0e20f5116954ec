use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchConfigError {
    #[error("keyword weight must be greater than zero")]
    ZeroKeywordWeight,

    #[error("match threshold must be greater than zero")]
    ZeroThreshold,

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("unknown keyword match mode '{value}' (expected 'substring' or 'whole_words')")]
    UnknownKeywordMatch { value: String },
}

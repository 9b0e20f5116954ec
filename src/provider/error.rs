use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// The secret the provider needs is not present in the environment.
    #[error("missing provider credentials: {env_var} is not set")]
    MissingCredentials { env_var: String },

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

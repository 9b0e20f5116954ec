//! Generative fallback used when the knowledge base has no answer.
//!
//! The gateway only ever reaches a provider after the matcher has missed.

pub mod error;
pub mod genai_provider;
pub mod mock;


pub use error::ProviderError;
pub use genai_provider::GenaiProvider;
pub use mock::MockProvider;

use async_trait::async_trait;

/// Produces a free-text reply for a message the knowledge base could not answer.
#[async_trait]
pub trait FallbackProvider: Send + Sync {
    /// Short, static name used in logs and readiness output.
    fn name(&self) -> &'static str;

    async fn generate(&self, message: &str) -> Result<String, ProviderError>;
}

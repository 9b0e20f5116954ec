use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{FallbackProvider, ProviderError};

/// Deterministic provider for local runs and tests.
#[derive(Debug, Default)]
pub struct MockProvider {
    calls: AtomicUsize,
    fail: bool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider whose every call fails with [`ProviderError::Upstream`].
    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FallbackProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate(&self, message: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::Upstream("mock provider failure".to_string()));
        }
        Ok(format!("Mock response for: {}", message))
    }
}

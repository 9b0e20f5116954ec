use std::sync::Arc;

use crate::corpus::Corpus;
use crate::matching::Matcher;
use crate::provider::{FallbackProvider, MockProvider};

#[derive(Clone)]
pub struct HandlerState {
    pub corpus: Arc<Corpus>,

    pub matcher: Matcher,

    pub provider: Arc<dyn FallbackProvider>,
}

impl HandlerState {
    pub fn new(corpus: Arc<Corpus>, matcher: Matcher, provider: Arc<dyn FallbackProvider>) -> Self {
        Self {
            corpus,
            matcher,
            provider,
        }
    }

    pub fn new_with_mock_provider(corpus: Arc<Corpus>, matcher: Matcher) -> Self {
        Self::new(corpus, matcher, Arc::new(MockProvider::new()))
    }
}

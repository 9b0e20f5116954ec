//! Test fixtures for integration tests.

use std::path::PathBuf;

use faqroute::corpus::{Corpus, KnowledgeEntry};

pub const DEFAULT_ID: &str = "entry";

pub const DEFAULT_ANSWER: &str = "Placeholder answer.";

/// Path to the sample knowledge base shipped with the crate.
pub fn sample_corpus_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("faq.json")
}

pub fn sample_corpus() -> Corpus {
    Corpus::load(sample_corpus_path()).expect("sample corpus should load")
}

#[derive(Default)]
pub struct EntryBuilder {
    id: Option<String>,
    question: Option<String>,
    answer: Option<String>,
    keywords: Vec<String>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn question(mut self, question: &str) -> Self {
        self.question = Some(question.to_string());
        self
    }

    pub fn answer(mut self, answer: &str) -> Self {
        self.answer = Some(answer.to_string());
        self
    }

    pub fn keyword(mut self, keyword: &str) -> Self {
        self.keywords.push(keyword.to_string());
        self
    }

    pub fn build(self) -> KnowledgeEntry {
        KnowledgeEntry {
            id: self.id.unwrap_or_else(|| DEFAULT_ID.to_string()),
            question: self.question.unwrap_or_default(),
            answer: self.answer.unwrap_or_else(|| DEFAULT_ANSWER.to_string()),
            keywords: self.keywords,
        }
    }
}

pub fn corpus_of(entries: Vec<KnowledgeEntry>) -> Corpus {
    Corpus::new(entries).expect("fixture corpus should be valid")
}

//! The in-memory knowledge base.
//!
//! A [`Corpus`] is built once (usually from a JSON document at startup),
//! validated, and never mutated afterwards. Share it behind an `Arc`.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "faqs": [
//!     {
//!       "id": "library-hours",
//!       "question": "What are library hours?",
//!       "answer": "The library opens 8am to 10pm.",
//!       "keywords": ["library hours", "library open"]
//!     }
//!   ]
//! }
//! ```
//!
//! `keywords` and `question` may be omitted. `id` and `answer` must be
//! non-empty and ids must be unique.
//!
//! # Precomputed Normalization
//!
//! Questions, answers, and keywords are normalized when the corpus is built.
//! Scoring against the cached forms is equivalent to normalizing on every
//! lookup, just without the repeated allocation.

pub mod entry;
pub mod error;


pub use entry::KnowledgeEntry;
pub use error::{CorpusError, CorpusResult};

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::hashing::{format_fingerprint, hash_to_u64};
use entry::NormalizedEntry;

#[derive(Debug, Deserialize)]
struct CorpusDocument {
    #[serde(default)]
    faqs: Vec<KnowledgeEntry>,
}

/// Ordered, validated, read-only collection of [`KnowledgeEntry`] records.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<KnowledgeEntry>,
    normalized: Vec<NormalizedEntry>,
    fingerprint: u64,
}

impl Corpus {
    /// Validates `entries` and builds a corpus preserving their order.
    pub fn new(entries: Vec<KnowledgeEntry>) -> CorpusResult<Self> {
        validate_entries(&entries)?;

        let normalized = entries.iter().map(NormalizedEntry::from_entry).collect();
        let fingerprint = fingerprint_entries(&entries);

        debug!(
            entries = entries.len(),
            fingerprint = %format_fingerprint(fingerprint),
            "Corpus built"
        );

        Ok(Self {
            entries,
            normalized,
            fingerprint,
        })
    }

    /// A corpus with no entries. Every lookup against it misses.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            normalized: Vec::new(),
            fingerprint: fingerprint_entries(&[]),
        }
    }

    /// Parses a `{ "faqs": [...] }` document.
    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        let document: CorpusDocument =
            serde_json::from_str(json).map_err(|source| CorpusError::Parse { source })?;
        Self::new(document.faqs)
    }

    /// Reads and parses a corpus document from disk.
    pub fn load(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeEntry> {
        self.entries.iter()
    }

    /// Looks an entry up by id.
    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// 64-bit BLAKE3 digest of the corpus contents (order-sensitive).
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Entries paired with their normalized text, in corpus order.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = (&KnowledgeEntry, &NormalizedEntry)> {
        self.entries.iter().zip(self.normalized.iter())
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::empty()
    }
}

fn validate_entries(entries: &[KnowledgeEntry]) -> CorpusResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        if entry.id.trim().is_empty() {
            return Err(CorpusError::EmptyId { index });
        }
        if entry.answer.trim().is_empty() {
            return Err(CorpusError::EmptyAnswer {
                id: entry.id.clone(),
            });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(CorpusError::DuplicateId {
                id: entry.id.clone(),
            });
        }
    }

    Ok(())
}

fn fingerprint_entries(entries: &[KnowledgeEntry]) -> u64 {
    // Serializing owned strings and vectors cannot fail.
    let canonical = serde_json::to_vec(entries).unwrap_or_default();
    hash_to_u64(&canonical)
}

//! In-memory keyword index over a small corpus of text documents.
//!
//! Documents are scanned one at a time, their keywords counted, and each
//! count folded into a per-keyword occurrence list kept in descending order
//! of frequency. Two-keyword queries merge those lists into a short ranked
//! list of document names.

pub mod error;
pub mod index;
pub mod loader;
pub mod ranking;
pub mod source;
pub mod tokenizer;

use serde::Serialize;

pub use error::{Result, SearchError};
pub use index::{build_index, IndexBuilder, KeywordIndex, DEFAULT_TOP_K};
pub use loader::{load_keywords, DocumentSource, FsDocumentSource, MemorySource};
pub use ranking::insert_last_occurrence;
pub use source::{load_noise_words, DocumentList};
pub use tokenizer::{get_keyword, NoiseWords};

/// Name of a document as it appears in the document list.
pub type DocumentId = String;

/// One keyword's count within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub document: DocumentId,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new(document: impl Into<DocumentId>, frequency: u32) -> Self {
        debug_assert!(frequency >= 1, "occurrence frequency must be at least 1");
        Self { document: document.into(), frequency }
    }
}

impl std::fmt::Display for Occurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}

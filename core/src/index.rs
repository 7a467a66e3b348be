use crate::error::Result;
use crate::loader::{load_keywords, DocumentSource};
use crate::ranking::insert_last_occurrence;
use crate::tokenizer::NoiseWords;
use crate::{DocumentId, Occurrence};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Result length of [`KeywordIndex::top5_search`].
pub const DEFAULT_TOP_K: usize = 5;

/// Keyword to occurrence list, each list in descending order of frequency.
///
/// Read-only once built; construct one through [`IndexBuilder`] or
/// [`build_index`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct KeywordIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
    num_docs: u32,
}

impl KeywordIndex {
    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn keywords(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    /// Documents containing `kw1` or `kw2`, best first, at most five.
    pub fn top5_search(&self, kw1: &str, kw2: &str) -> Vec<DocumentId> {
        self.top_k_search(kw1, kw2, DEFAULT_TOP_K)
    }

    /// Merge the occurrence lists of two keywords into at most `k` distinct
    /// documents, ordered by descending frequency.
    ///
    /// Equal frequencies favour `kw1`. A document found in both lists is
    /// reported once, at the rank of its higher frequency. Unknown keywords
    /// contribute nothing.
    pub fn top_k_search(&self, kw1: &str, kw2: &str, k: usize) -> Vec<DocumentId> {
        let first = self.occurrences(kw1).unwrap_or_default();
        let second = self.occurrences(kw2).unwrap_or_default();

        let mut result: Vec<DocumentId> = Vec::with_capacity(k.min(first.len() + second.len()));
        let (mut i, mut j) = (0, 0);
        while result.len() < k {
            let next = match (first.get(i), second.get(j)) {
                (None, None) => break,
                (Some(a), Some(b)) if a.frequency >= b.frequency => { i += 1; a }
                (Some(a), None) => { i += 1; a }
                (_, Some(b)) => { j += 1; b }
            };
            if !result.contains(&next.document) {
                result.push(next.document.clone());
            }
        }
        tracing::debug!(kw1, kw2, hits = result.len(), "top-k search");
        result
    }
}

/// Owns the index while documents are merged into it.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    index: KeywordIndex,
}

impl IndexBuilder {
    pub fn new() -> Self { Self::default() }

    /// Fold one document's keyword occurrences into the index.
    ///
    /// Must be called once per document; merging the same document twice
    /// counts it twice.
    pub fn merge_keywords(&mut self, kws: HashMap<String, Occurrence>) {
        for (keyword, occurrence) in kws {
            match self.index.keywords.get_mut(&keyword) {
                Some(list) => {
                    list.push(occurrence);
                    let mids = insert_last_occurrence(list);
                    tracing::trace!(keyword = %keyword, probes = ?mids, len = list.len(), "ranked insertion");
                }
                None => {
                    self.index.keywords.insert(keyword, vec![occurrence]);
                }
            }
        }
        self.index.num_docs += 1;
    }

    /// Load `document` from `source` and merge its keywords.
    pub fn add_document<S: DocumentSource + ?Sized>(
        &mut self,
        document: &str,
        source: &S,
        noise: &NoiseWords,
    ) -> Result<()> {
        let kws = load_keywords(document, source, noise)?;
        self.merge_keywords(kws);
        Ok(())
    }

    pub fn finish(self) -> KeywordIndex {
        tracing::info!(num_docs = self.index.num_docs, num_keywords = self.index.len(), "index build complete");
        self.index
    }
}

/// Index every document in order. The first unreadable document aborts the build.
///
/// A name listed more than once is merged only the first time.
pub fn build_index<I, S>(documents: I, noise: &NoiseWords, source: &S) -> Result<KeywordIndex>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: DocumentSource + ?Sized,
{
    let mut builder = IndexBuilder::new();
    let mut merged: HashSet<String> = HashSet::new();
    for document in documents {
        let document = document.as_ref();
        if !merged.insert(document.to_string()) {
            tracing::warn!(document, "document listed more than once, skipping repeat");
            continue;
        }
        builder.add_document(document, source, noise)?;
    }
    Ok(builder.finish())
}

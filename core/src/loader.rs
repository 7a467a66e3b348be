use crate::error::{Result, SearchError};
use crate::tokenizer::{get_keyword, NoiseWords};
use crate::Occurrence;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Supplies the text of a document, line by line.
pub trait DocumentSource {
    fn read_lines(&self, document: &str) -> Result<Vec<String>>;
}

/// Resolves document names as paths relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    pub fn path_of(&self, document: &str) -> PathBuf { self.root.join(document) }
}

impl DocumentSource for FsDocumentSource {
    fn read_lines(&self, document: &str) -> Result<Vec<String>> {
        let not_found = |source: io::Error| SearchError::DocumentNotFound { document: document.to_string(), source };
        let f = File::open(self.path_of(document)).map_err(not_found)?;
        // invalid UTF-8 is replaced, not treated as a missing document
        BufReader::new(f)
            .split(b'\n')
            .map(|line| line.map(|bytes| decode_line(&bytes)))
            .collect::<io::Result<Vec<_>>>()
            .map_err(not_found)
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Documents held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, document: impl Into<String>, text: impl Into<String>) {
        self.docs.insert(document.into(), text.into());
    }
}

impl<D: Into<String>, T: Into<String>> FromIterator<(D, T)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (D, T)>>(iter: I) -> Self {
        let mut source = MemorySource::new();
        for (document, text) in iter {
            source.insert(document, text);
        }
        source
    }
}

impl DocumentSource for MemorySource {
    fn read_lines(&self, document: &str) -> Result<Vec<String>> {
        match self.docs.get(document) {
            Some(text) => Ok(text.lines().map(str::to_string).collect()),
            None => Err(SearchError::DocumentNotFound {
                document: document.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such document in memory source"),
            }),
        }
    }
}

/// Count every keyword in one document.
///
/// Each keyword maps to a single occurrence for `document` whose frequency is
/// the number of tokens in the document that normalize to it.
pub fn load_keywords<S: DocumentSource + ?Sized>(
    document: &str,
    source: &S,
    noise: &NoiseWords,
) -> Result<HashMap<String, Occurrence>> {
    let lines = source.read_lines(document)?;
    let mut counts: HashMap<String, u32> = HashMap::new();
    for line in &lines {
        if line.trim().is_empty() { continue; }
        for token in line.split_whitespace() {
            if let Some(keyword) = get_keyword(token, noise) {
                *counts.entry(keyword).or_insert(0) += 1;
            }
        }
    }
    tracing::debug!(document, lines = lines.len(), keywords = counts.len(), "loaded document");

    Ok(counts
        .into_iter()
        .map(|(keyword, frequency)| (keyword, Occurrence::new(document, frequency)))
        .collect())
}

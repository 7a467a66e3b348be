//! File-backed configuration: the list of documents to index and the
//! noise-word list. Both files hold whitespace-separated words.

use crate::error::{Result, SearchError};
use crate::loader::FsDocumentSource;
use crate::tokenizer::NoiseWords;
use crate::DocumentId;
use std::fs;
use std::path::{Path, PathBuf};

fn read_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|source| SearchError::ConfigNotFound { path: path.to_path_buf(), source })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Load the noise-word list, one or more words per line.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    let words = read_words(path.as_ref())?;
    let noise: NoiseWords = words.iter().collect();
    tracing::debug!(path = %path.as_ref().display(), count = noise.len(), "loaded noise words");
    Ok(noise)
}

/// A document list file and the directory its names are relative to.
#[derive(Debug, Clone)]
pub struct DocumentList {
    pub root: PathBuf,
    pub documents: Vec<DocumentId>,
}

impl DocumentList {
    /// Read a document list; names in it resolve against the list's own directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let documents = read_words(path)?;
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        tracing::debug!(path = %path.display(), count = documents.len(), "loaded document list");
        Ok(Self { root, documents })
    }

    pub fn source(&self) -> FsDocumentSource { FsDocumentSource::new(&self.root) }
}

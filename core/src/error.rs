use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    /// A listed document could not be opened or read.
    #[error("document not found: {document}")]
    DocumentNotFound {
        document: String,
        #[source]
        source: io::Error,
    },

    /// The document list or the noise-word list could not be opened or read.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = core::result::Result<T, SearchError>;

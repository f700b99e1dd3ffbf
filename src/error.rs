//! Error types shared by both batch jobs.
//!
//! Errors fall into two groups. Per-article errors ([`Error::MissingInput`],
//! [`Error::InvalidUrl`], [`Error::Fetch`], [`Error::Extraction`]) cause the
//! batch driver to skip one row and continue. Everything else aborts the run
//! before or after the per-article loop.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The stored text for an article identifier could not be read.
    #[error("article {id} unavailable at {}: {source}", path.display())]
    MissingInput {
        id: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A required word-list file or directory is absent or unreadable.
    #[error("lexicon {} could not be read: {source}", path.display())]
    MissingLexicon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The input table is unreadable or lacks the required columns.
    #[error("input table {}: {reason}", path.display())]
    InputTable { path: PathBuf, reason: String },

    #[error("invalid article URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// The page was fetched but did not contain a usable title or body.
    #[error("no {what} found at {url}")]
    Extraction { url: String, what: &'static str },

    #[error("failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the batch driver should skip the current row and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MissingInput { .. }
                | Error::InvalidUrl { .. }
                | Error::Fetch { .. }
                | Error::Extraction { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_is_recoverable() {
        let err = Error::MissingInput {
            id: "42".to_string(),
            path: PathBuf::from("articles/42.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("articles/42.txt"));
    }

    #[test]
    fn test_missing_lexicon_is_fatal() {
        let err = Error::MissingLexicon {
            path: PathBuf::from("StopWords"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_extraction_message() {
        let err = Error::Extraction {
            url: "https://example.com/a".to_string(),
            what: "<h1> title",
        };
        assert_eq!(err.to_string(), "no <h1> title found at https://example.com/a");
    }
}

// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::net::FetchError;
use crate::core::uri::NormalizeError;

/// Anything that stops the crawl. Never retried.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

#[derive(Debug, Error)]
pub enum CrawlError {
    /// `index` is 1-based, matching the progress output.
    #[error("crawl aborted at record {index} `{name}`")]
    Aborted {
        index: usize,
        name: String,
        #[source]
        cause: FatalError,
    },
}

impl CrawlError {
    pub fn cause(&self) -> &FatalError {
        match self {
            CrawlError::Aborted { cause, .. } => cause,
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read source file {}", path.display())]
    Io { path: PathBuf, #[source] source: io::Error },

    #[error("source file {} has no header row", path.display())]
    Empty { path: PathBuf },

    #[error("source file {} has no `name` column", path.display())]
    MissingName { path: PathBuf },

    #[error("source file {} row {row}: expected {expected} fields, found {found}", path.display())]
    RowWidth { path: PathBuf, row: usize, expected: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Crawl(#[from] CrawlError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not write result file {}", path.display())]
    Write { path: PathBuf, #[source] source: io::Error },
}

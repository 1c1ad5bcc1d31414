//! Error types shared across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while initializing, saving, validating, or loading pages
/// in a page directory.
#[derive(Debug, Error)]
pub enum PagedirError {
    #[error("pageDirectory {0} is not crawler-produced")]
    NotCrawlerProduced(PathBuf),

    #[error("failed opening .crawler file in pageDirectory {0}")]
    InitFailed(PathBuf),

    #[error("failed opening page file {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Errors raised while crawling.
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("seedURL could not be normalized")]
    SeedNotNormalizable,

    #[error("seedURL {0} is not internal")]
    SeedNotInternal(String),

    #[error(transparent)]
    Pagedir(#[from] PagedirError),
}

/// Errors raised while tokenizing or validating a query.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QueryError {
    #[error("bad character '{0}' in query.")]
    BadCharacter(char),

    #[error("'{0}' cannot be first.")]
    OperatorFirst(String),

    #[error("'{0}' cannot be last.")]
    OperatorLast(String),

    #[error("'{0}' and '{1}' cannot be adjacent.")]
    AdjacentOperators(String, String),
}

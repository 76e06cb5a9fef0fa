//! Error types surfaced by the library.

use std::path::PathBuf;
use thiserror::Error;

/// Rejection of a query before any search work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("input too long: {len} letters given, at most {max} allowed")]
    InputTooLong { len: usize, max: usize },
}

/// Failure to obtain a word list from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dictionary {} is not valid UTF-8", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

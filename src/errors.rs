//! Provides the error type used throughout this crate.
//!
//! Note that a value that cannot be found is *not* an error. Searches
//! report that case with `None`.

use thiserror::Error;

/// The error type used throughout this crate
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("Index {index} is out of bound for a sequence of length {len}")]
    IndexOutOfBound { index: usize, len: usize },
    #[error("No root node set")]
    RootNotSet,
    #[error("Unknown traversal order: {0}")]
    UnknownOrder(String),
}

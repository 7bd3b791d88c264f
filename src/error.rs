// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types.
//!
//! Only two things can fail: pool construction (a configuration error) and
//! the output sink (an I/O boundary). Enumeration and filtering are pure,
//! in-memory operations with nothing transient to retry.

use thiserror::Error;

/// Errors surfaced by pool construction and the search run.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The pool is too small or too large to search. Fatal: no enumeration
    /// is attempted and no partial output is produced.
    #[error("pool must contain between 7 and 49 numbers, got {size}")]
    InvalidPoolSize { size: usize },

    /// The output sink failed while a combination was being emitted. The
    /// remaining enumeration is abandoned; the valid count only ever covers
    /// combinations the sink actually received.
    #[error("failed to write combination: {0}")]
    Sink(#[from] std::io::Error),
}

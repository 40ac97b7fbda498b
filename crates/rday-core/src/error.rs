//! Base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::ids::StationId;

/// The base error type for `rday-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("station {0} not found")]
    StationNotFound(StationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `rday-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;

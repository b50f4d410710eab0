//! Error types for tollgate store operations.

use std::io;
use thiserror::Error;

/// The error type for tollgate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The entity failed validation and was not written.
    #[error("Validation failed for {id}: {reason}")]
    Validation {
        /// Identity of the rejected entity
        id: String,
        /// Why validation rejected it
        reason: String,
    },

    /// An entity with the same identity is already stored.
    #[error("Duplicate identity: {0}")]
    DuplicateId(String),

    /// No entity with the given identity exists.
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// The offloaded search task could not be joined.
    #[error("Search task failed: {0}")]
    SearchTask(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A specialized Result type for tollgate operations.
pub type Result<T> = std::result::Result<T, Error>;

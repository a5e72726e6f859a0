//! Error types for paybook.
//!
//! Uses `thiserror` for ergonomic error definitions. Every error here is
//! recoverable at the call site: the CLI layer converts each into a
//! user-facing notification rather than aborting.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("invalid client name: {0}")]
    InvalidClient(String),

    #[error("client '{0}' already exists")]
    DuplicateClient(String),

    #[error("no record at position {index} (ledger has {len} records)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("no edit in progress")]
    NoEditInProgress,

    /// State was mutated in memory but could not be persisted.
    ///
    /// The mutation is NOT rolled back; callers should surface this as a
    /// warning and carry on.
    #[error("state updated in memory but not persisted: {0}")]
    Persistence(#[from] StorageError),
}

/// Result type alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors raised by the persistence backend.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read state slot '{slot}': {reason}")]
    ReadFailed { slot: String, reason: String },

    #[error("failed to write state slot '{slot}': {reason}")]
    WriteFailed { slot: String, reason: String },

    #[error("failed to serialize state slot '{slot}': {reason}")]
    SerializeFailed { slot: String, reason: String },

    #[error("failed to create state directory: {0}")]
    DirectoryError(String),
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine application directories")]
    DirectoryNotFound,

    #[error("failed to read config file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write config file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::InvalidFormat(e.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

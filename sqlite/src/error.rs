//! Error types for store operations.

use thiserror::Error;

/// Errors reported by [`Store`](crate::Store) operations.
///
/// Every operation is attempted exactly once; all variants are recoverable
/// and none is fatal to the process.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The engine rejected an open, compile, or execute step. The
    /// underlying diagnostic is carried along rather than discarded.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An operation was attempted after [`close`](crate::Store::close).
    #[error("not connected: the store has been closed")]
    NotConnected,

    /// The platform user-data directory could not be resolved.
    #[error("could not resolve the user data directory for this platform")]
    DataDir,

    /// The engine refused to close the connection (e.g. an unfinalized
    /// statement is still live). The store stays connected.
    #[error("failed to close the database: {source}")]
    Close {
        #[source]
        source: rusqlite::Error,
    },
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;

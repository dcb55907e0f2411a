//! Error types for llamavocs-store.

use thiserror::Error;

/// Result type for card store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the card store.
///
/// Store errors are never retried or masked; callers receive them as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// SQLite error (sqlite feature).
    ///
    /// Covers an unreachable database file, constraint violations and rows
    /// that fail to decode into a [`Card`](crate::Card).
    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The shared connection lock was poisoned by a panicking holder.
    #[error("card store connection is poisoned")]
    LockPoisoned,
}

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents all errors that a key-value store can report.
pub enum StoreError {
    /// Reading or writing the blob stored under `key` failed.
    #[error("Failed to access stored key '{key}': {source}")]
    Io {
        /// The key being accessed.
        key:    String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

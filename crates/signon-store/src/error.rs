use signon_model::ModelError;

/// Errors that can occur in the storage layer.
///
/// Only writes surface errors. Reads and clears degrade instead: an
/// absent, unreadable, or malformed entry reads back as `None`, so a
/// broken store can never leave a caller stuck logged in.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Serializing a record for storage failed.
    #[error(transparent)]
    Codec(#[from] ModelError),

    /// Writing to the backing file failed.
    #[error("write failed: {0}")]
    WriteFailed(#[source] std::io::Error),
}

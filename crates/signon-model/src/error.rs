//! Error types for the model layer.
//!
//! Each crate in Signon defines its own error enum, so a `ModelError`
//! always means a record failed to encode or decode — never a storage or
//! authentication problem.

/// Errors that can occur while encoding or decoding a session record.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Serialization failed (turning a record into a payload string).
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Deserialization failed (turning a payload string into a record).
    ///
    /// Common causes: malformed JSON, a missing or extra field, or a
    /// `loginTime` that is not a valid ISO-8601 timestamp. Stores treat
    /// any of these as "no record present".
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),
}

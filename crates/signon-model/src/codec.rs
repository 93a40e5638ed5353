//! Payload encoding/decoding for [`SessionRecord`].
//!
//! Both storage tiers hold records in the same serialized form: a JSON
//! payload string (the shape browser storage would hold). Encoding and
//! decoding live here, behind the `json` feature (enabled by default),
//! so stores never touch serde_json directly.

use crate::{ModelError, SessionRecord};

impl SessionRecord {
    /// Serializes the record into a payload string.
    ///
    /// # Errors
    /// Returns [`ModelError::Encode`] if serialization fails.
    pub fn to_payload(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(ModelError::Encode)
    }

    /// Parses a payload string back into a record.
    ///
    /// # Errors
    /// Returns [`ModelError::Decode`] if the payload is not a JSON object
    /// with exactly the fields `username` and `loginTime`, or if
    /// `loginTime` is not a valid ISO-8601 timestamp.
    pub fn from_payload(payload: &str) -> Result<Self, ModelError> {
        serde_json::from_str(payload).map_err(ModelError::Decode)
    }
}

// =========================================================================
// Tests
// =========================================================================

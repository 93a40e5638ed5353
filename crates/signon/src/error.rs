//! Unified error type for the Signon facade.

use signon_auth::{AuthError, ValidationError};
use signon_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `signon` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate.
#[derive(Debug, thiserror::Error)]
pub enum SignonError {
    /// The form was malformed (empty or non-ASCII fields).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The credentials did not match any known user.
    ///
    /// Unknown username and wrong password both land here; the
    /// message never says which.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A login was attempted while a session is already active.
    #[error("already logged in as {username}")]
    AlreadyLoggedIn {
        /// The user holding the active session.
        username: String,
    },

    /// The session store failed to persist a record.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The collapse point for authentication failures: every [`AuthError`]
/// becomes the one generic variant, so nothing downstream can tell an
/// unknown username from a wrong password.
impl From<AuthError> for SignonError {
    fn from(_: AuthError) -> Self {
        Self::InvalidCredentials
    }
}

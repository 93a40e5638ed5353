//! Credential checking against a [`CredentialStore`].

use crate::credentials::CredentialStore;
use crate::error::AuthError;

/// Checks `username` / `password` against the store.
///
/// The two failure modes (unknown user, wrong password) are distinct
/// variants so callers can count or log them separately, but both
/// render as the same "invalid credentials" message. Never surface the
/// variant itself to an end user: it reveals which usernames exist.
pub fn authenticate(
    store: &CredentialStore,
    username: &str,
    password: &str,
) -> Result<(), AuthError> {
    match store.password_for(username) {
        Some(stored) if stored == password => Ok(()),
        Some(_) => Err(AuthError::BadPassword),
        None => Err(AuthError::NotFound),
    }
}

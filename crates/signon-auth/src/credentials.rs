//! The fixed credential set used for authentication lookups.
//!
//! A real deployment would replace this with hashed credentials behind a
//! database or identity provider; the store here is a plain map seeded at
//! construction and never mutated, which is all a demonstration core
//! needs.

use std::collections::HashMap;

/// The built-in demonstration users.
const DEFAULT_USERS: [(&str, &str); 3] = [
    ("admin", "admin123"),
    ("user1", "password1"),
    ("testuser", "test123"),
];

/// A read-only username → password map, fixed at construction.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    entries: HashMap<String, String>,
}

impl CredentialStore {
    /// Builds a store from `(username, password)` pairs.
    pub fn new<I, U, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (U, P)>,
        U: Into<String>,
        P: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(user, pass)| (user.into(), pass.into()))
                .collect(),
        }
    }

    /// Builds the store with the demonstration users
    /// (`admin`, `user1`, `testuser`).
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_USERS)
    }

    /// Returns the stored password for `username`, if the user exists.
    /// Lookup is exact and case-sensitive.
    pub(crate) fn password_for(&self, username: &str) -> Option<&str> {
        self.entries.get(username).map(String::as_str)
    }

    /// Returns the number of registered users.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no users.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! Error types for the identity layer.
//!
//! Validation errors are field-attributed so an edge can highlight the
//! offending input. Authentication errors are deliberately not: both
//! failure paths render one generic message.

use std::fmt;

/// The form field an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The username input.
    Username,
    /// The password input.
    Password,
    /// Both inputs at once (the empty-field error highlights the whole
    /// form).
    Both,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => write!(f, "username"),
            Self::Password => write!(f, "password"),
            Self::Both => write!(f, "username and password"),
        }
    }
}

/// Errors produced by structural validation of the login form.
///
/// Exactly one of these is surfaced per [`validate`](crate::validate)
/// call, even when several conditions hold — the check order decides
/// which (empty before unicode, username before password).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username or password (or both) is empty. Wins over every other
    /// check; attributed to both fields.
    #[error("username and password are required")]
    EmptyField,

    /// The named field contains characters outside 7-bit ASCII.
    #[error("{field} must not contain unicode characters")]
    UnicodeCharacters {
        /// Which input failed the check.
        field: Field,
    },
}

impl ValidationError {
    /// The field(s) an edge should mark for this error.
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyField => Field::Both,
            Self::UnicodeCharacters { field } => *field,
        }
    }
}

/// Errors produced by credential verification.
///
/// The two variants exist so internal callers can branch on the cause,
/// but both render the identical "invalid credentials" message — the
/// user-facing text never reveals whether the username or the password
/// was wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No entry exists for the username.
    #[error("invalid credentials")]
    NotFound,

    /// An entry exists but its password does not match.
    #[error("invalid credentials")]
    BadPassword,
}

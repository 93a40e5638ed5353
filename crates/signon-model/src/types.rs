//! Core data types shared by every Signon layer.
//!
//! These are the structures that flow between the caller-facing edge, the
//! validator/authenticator, and the session store:
//!
//! - [`FormInput`] — what the user typed (owned and mutated by the edge)
//! - [`SessionRecord`] — what a login persists (the only serialized type)
//! - [`SessionTier`] — which of the two storage lifetimes a record lives in
//! - [`SessionState`] — the derived logged-in/logged-out view

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FormInput
// ---------------------------------------------------------------------------

/// The raw contents of the login form.
///
/// Owned exclusively by the caller-facing edge, which mutates it on every
/// keystroke or checkbox toggle and resets it to `Default` on logout. The
/// core only ever borrows it — validation and login take `&FormInput`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    /// The username field, possibly empty.
    pub username: String,
    /// The password field, possibly empty.
    pub password: String,
    /// Whether the "remember me" checkbox is ticked. Selects the storage
    /// tier a successful login writes to.
    pub remember: bool,
}

impl FormInput {
    /// Creates a filled-in form. Mostly a convenience for tests and
    /// non-interactive callers; interactive edges mutate the fields
    /// directly.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        remember: bool,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionTier
// ---------------------------------------------------------------------------

/// One of the two storage lifetimes a session record can live in.
///
/// Exactly one tier is written per login, selected by the form's
/// `remember` flag. The tiers mirror browser storage:
///
/// - **Persistent** survives a client restart (browser `localStorage`).
/// - **Ephemeral** is lost when the client closes (browser
///   `sessionStorage` — same-tab memory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionTier {
    /// Survives a simulated (or real) client restart.
    Persistent,
    /// Discarded on restart.
    Ephemeral,
}

impl SessionTier {
    /// Selects the tier a login writes to: `remember` → Persistent,
    /// otherwise Ephemeral.
    pub fn for_remember(remember: bool) -> Self {
        if remember {
            Self::Persistent
        } else {
            Self::Ephemeral
        }
    }
}

impl fmt::Display for SessionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistent => write!(f, "persistent"),
            Self::Ephemeral => write!(f, "ephemeral"),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionRecord
// ---------------------------------------------------------------------------

/// The persisted session record — the only type Signon ever serializes.
///
/// On the wire (in either tier) this is a JSON object with exactly two
/// fields:
///
/// ```json
/// { "username": "admin", "loginTime": "2025-03-01T08:30:00Z" }
/// ```
///
/// `deny_unknown_fields` makes any extra field a decode error, and serde
/// rejects missing fields on its own, so a payload with the wrong shape is
/// malformed — stores treat malformed payloads as absent rather than
/// surfacing them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SessionRecord {
    /// Who logged in.
    pub username: String,
    /// When they logged in, serialized as an ISO-8601 string.
    pub login_time: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record for `username` stamped with the current time.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            login_time: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The derived session state: who, if anyone, is logged in.
///
/// This is never persisted — it is recomputed from record presence at
/// startup and after every controller operation. The controller holds the
/// only long-lived copy and cycles between the two states for the process
/// lifetime:
///
/// ```text
///   LoggedOut ──(login ok)──→ LoggedIn(username)
///       ↑                          │
///       └──(logout / restart with──┘
///           no persistent record)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No active session in either tier.
    LoggedOut,
    /// An active session exists for `username`.
    LoggedIn {
        /// The session's owner.
        username: String,
    },
}

impl SessionState {
    /// Derives the state from a (possibly absent) stored record.
    pub fn from_record(record: Option<SessionRecord>) -> Self {
        match record {
            Some(record) => Self::LoggedIn {
                username: record.username,
            },
            None => Self::LoggedOut,
        }
    }

    /// Returns `true` if a session is active.
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    /// Returns the logged-in username, or `None` when logged out.
    pub fn current_user(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { username } => Some(username),
            Self::LoggedOut => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => write!(f, "logged out"),
            Self::LoggedIn { username } => {
                write!(f, "logged in as {username}")
            }
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

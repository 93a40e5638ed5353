//! `SessionController` builder and state machine.
//!
//! This is the entry point for driving a login session. It ties
//! together all the layers: validation → authentication → storage.

use signon_auth::{CredentialStore, authenticate, validate};
use signon_model::{FormInput, SessionRecord, SessionState, SessionTier};
use signon_store::{MemoryStore, SessionStore};

use crate::SignonError;

/// Builder for configuring a [`SessionController`].
///
/// # Example
///
/// ```rust
/// use signon::prelude::*;
///
/// let controller = SessionController::builder().build();
/// assert!(!controller.session_state().is_logged_in());
/// ```
pub struct SessionControllerBuilder<S: SessionStore> {
    credentials: CredentialStore,
    store: S,
}

impl SessionControllerBuilder<MemoryStore> {
    /// Creates a builder with the built-in credential set and an
    /// in-memory store.
    pub fn new() -> Self {
        Self {
            credentials: CredentialStore::with_defaults(),
            store: MemoryStore::new(),
        }
    }
}

impl Default for SessionControllerBuilder<MemoryStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SessionStore> SessionControllerBuilder<S> {
    /// Sets the credential set logins are checked against.
    pub fn credentials(mut self, credentials: CredentialStore) -> Self {
        self.credentials = credentials;
        self
    }

    /// Swaps in a different store backend.
    pub fn store<T: SessionStore>(
        self,
        store: T,
    ) -> SessionControllerBuilder<T> {
        SessionControllerBuilder {
            credentials: self.credentials,
            store,
        }
    }

    /// Builds the controller, restoring any session the persistent
    /// tier still holds.
    ///
    /// Only the persistent tier is consulted: a fresh start is a
    /// reopened application, and the ephemeral tier does not outlive
    /// the application that wrote it.
    pub fn build(self) -> SessionController<S> {
        let state = SessionState::from_record(
            self.store.read(SessionTier::Persistent),
        );
        if let SessionState::LoggedIn { username } = &state {
            tracing::info!(%username, "restored persistent session");
        }
        SessionController {
            credentials: self.credentials,
            store: self.store,
            state,
        }
    }
}

/// The state machine behind a login form.
///
/// ## Lifecycle
///
/// ```text
///                  login() ok               logout()
///     [LoggedOut] ──────────→ [LoggedIn] ──────────→ [LoggedOut]
///          │                      │
///          │ login() rejected     │ simulate_restart()
///          ▼ (state unchanged)    ▼
///     [LoggedOut]          [LoggedIn]  if the persistent tier
///                                      holds a record,
///                          [LoggedOut] otherwise
/// ```
///
/// The controller owns its [`SessionStore`] and keeps its state
/// consistent with it: the state only flips to logged-in after the
/// record is safely written, and every path that fails to produce a
/// readable record lands in [`SessionState::LoggedOut`].
pub struct SessionController<S: SessionStore> {
    credentials: CredentialStore,
    store: S,
    state: SessionState,
}

impl SessionController<MemoryStore> {
    /// Creates a new builder.
    pub fn builder() -> SessionControllerBuilder<MemoryStore> {
        SessionControllerBuilder::new()
    }
}

impl<S: SessionStore> SessionController<S> {
    /// Attempts to log in with the given form input and returns the
    /// resulting state.
    ///
    /// The checks run in a fixed order: an active session wins over
    /// everything, then validation, then authentication. On success
    /// the record is written to the tier picked by `input.remember`
    /// (persistent when set, ephemeral when not) before the state
    /// flips, so a failed write leaves the controller logged out.
    ///
    /// # Errors
    /// - [`SignonError::AlreadyLoggedIn`] — a session is active
    /// - [`SignonError::Validation`] — empty or non-ASCII fields
    /// - [`SignonError::InvalidCredentials`] — no matching user
    /// - [`SignonError::Store`] — the record could not be written
    pub fn login(
        &mut self,
        input: &FormInput,
    ) -> Result<&SessionState, SignonError> {
        if let SessionState::LoggedIn { username } = &self.state {
            return Err(SignonError::AlreadyLoggedIn {
                username: username.clone(),
            });
        }

        if let Err(err) = validate(input) {
            tracing::debug!(%err, "login rejected: invalid input");
            return Err(err.into());
        }

        if let Err(err) =
            authenticate(&self.credentials, &input.username, &input.password)
        {
            tracing::debug!(
                username = %input.username,
                ?err,
                "login rejected"
            );
            return Err(err.into());
        }

        let tier = SessionTier::for_remember(input.remember);
        let record = SessionRecord::new(&input.username);
        self.store.write(tier, &record)?;

        self.state = SessionState::LoggedIn {
            username: input.username.clone(),
        };
        tracing::info!(username = %input.username, %tier, "logged in");
        Ok(&self.state)
    }

    /// Logs out, clearing both tiers.
    ///
    /// Total and idempotent: logging out while already logged out is
    /// a no-op, and both tiers are cleared regardless of which one
    /// the session lived in.
    pub fn logout(&mut self) {
        if let SessionState::LoggedIn { username } = &self.state {
            tracing::info!(%username, "logged out");
        }
        self.store.clear_all();
        self.state = SessionState::LoggedOut;
    }

    /// Models closing and reopening the application.
    ///
    /// The ephemeral tier is dropped and the state is re-derived from
    /// the persistent tier, so a remembered session survives and an
    /// unremembered one does not.
    pub fn simulate_restart(&mut self) -> &SessionState {
        self.state = self.store.simulate_restart();
        match &self.state {
            SessionState::LoggedIn { username } => {
                tracing::info!(%username, "restart kept persistent session");
            }
            SessionState::LoggedOut => {
                tracing::info!("restart dropped session");
            }
        }
        &self.state
    }

    /// Returns the current session state.
    pub fn session_state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the logged-in username, if any.
    pub fn current_user(&self) -> Option<&str> {
        self.state.current_user()
    }

    /// Returns a view of the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn form(username: &str, password: &str, remember: bool) -> FormInput {
        FormInput::new(username, password, remember)
    }

    #[test]
    fn test_builder_default_starts_logged_out() {
        let controller = SessionController::builder().build();
        assert_eq!(*controller.session_state(), SessionState::LoggedOut);
        assert_eq!(controller.current_user(), None);
    }

    #[test]
    fn test_build_restores_persistent_session() {
        let mut store = MemoryStore::new();
        store
            .write(SessionTier::Persistent, &SessionRecord::new("admin"))
            .unwrap();

        let controller =
            SessionController::builder().store(store).build();
        assert_eq!(controller.current_user(), Some("admin"));
    }

    #[test]
    fn test_build_ignores_ephemeral_tier() {
        // A fresh start models a reopened application; only the
        // persistent tier can bring a session back.
        let mut store = MemoryStore::new();
        store
            .write(SessionTier::Ephemeral, &SessionRecord::new("admin"))
            .unwrap();

        let controller =
            SessionController::builder().store(store).build();
        assert_eq!(*controller.session_state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_build_discards_malformed_persistent_record() {
        let mut store = MemoryStore::new();
        store.write_raw(SessionTier::Persistent, "{corrupt");

        let controller =
            SessionController::builder().store(store).build();
        assert_eq!(*controller.session_state(), SessionState::LoggedOut);
    }

    #[test]
    fn test_custom_credentials_replace_defaults() {
        let credentials = CredentialStore::new([("alice", "secret")]);
        let mut controller = SessionController::builder()
            .credentials(credentials)
            .build();

        assert!(controller.login(&form("alice", "secret", false)).is_ok());
        controller.logout();
        assert!(matches!(
            controller.login(&form("admin", "admin123", false)),
            Err(SignonError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_login_writes_before_state_flips() {
        let mut controller = SessionController::builder().build();
        controller.login(&form("admin", "admin123", true)).unwrap();

        let stored = controller
            .store()
            .read(SessionTier::Persistent)
            .unwrap();
        assert_eq!(stored.username, "admin");
        assert_eq!(controller.current_user(), Some("admin"));
    }
}

//! # Signon
//!
//! Client-side login session manager with two-tier persistence.
//!
//! Signon models the session half of a login form: it validates the
//! form, checks credentials against a fixed user set, and keeps the
//! resulting session in one of two storage tiers — persistent
//! (survives restarting the application, like a browser's
//! `localStorage`) or ephemeral (lost on restart, like
//! `sessionStorage`). A [`SessionController`] drives the whole flow;
//! a [`SessionStore`] decides where records actually live.
//!
//! ## Quick Start
//!
//! ```rust
//! use signon::prelude::*;
//!
//! let mut controller = SessionController::builder().build();
//!
//! let input = FormInput {
//!     username: "admin".to_string(),
//!     password: "admin123".to_string(),
//!     remember: true,
//! };
//! controller.login(&input)?;
//! assert_eq!(controller.current_user(), Some("admin"));
//!
//! // A remembered session survives closing and reopening the app.
//! controller.simulate_restart();
//! assert!(controller.session_state().is_logged_in());
//! # Ok::<(), SignonError>(())
//! ```
//!
//! ## Crates
//!
//! The `signon` meta-crate re-exports the pieces:
//!
//! - `signon-model` — [`FormInput`], [`SessionRecord`],
//!   [`SessionState`], [`SessionTier`]
//! - `signon-auth` — [`CredentialStore`], input validation,
//!   credential checks
//! - `signon-store` — [`SessionStore`], [`MemoryStore`], [`FileStore`]

mod controller;
mod error;

pub use controller::{SessionController, SessionControllerBuilder};
pub use error::SignonError;

pub use signon_auth::{CredentialStore, Field, ValidationError};
pub use signon_model::{
    FormInput, ModelError, SessionRecord, SessionState, SessionTier,
};
pub use signon_store::{FileStore, MemoryStore, SessionStore, StoreError};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::{
        CredentialStore, Field, FileStore, FormInput, MemoryStore,
        SessionController, SessionControllerBuilder, SessionRecord,
        SessionState, SessionStore, SessionTier, SignonError,
        ValidationError,
    };
}

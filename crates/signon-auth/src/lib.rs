//! Identity checking for Signon.
//!
//! This crate decides whether a login attempt may proceed:
//!
//! 1. **Validation** — is the form well-formed? ([`validate`])
//! 2. **Authentication** — do the credentials match a known user?
//!    ([`authenticate`] against a [`CredentialStore`])
//!
//! The two steps are deliberately separate: validation errors name the
//! offending field, while authentication failures collapse into one
//! generic message so callers cannot probe which usernames exist.
//!
//! # How it fits in the stack
//!
//! ```text
//! Controller Layer (above)  ← orders the checks and persists the session
//!     ↕
//! Auth Layer (this crate)   ← validates input, checks credentials
//!     ↕
//! Model Layer (below)       ← provides FormInput
//! ```

mod authenticator;
mod credentials;
mod error;
mod validator;

pub use authenticator::authenticate;
pub use credentials::CredentialStore;
pub use error::{AuthError, Field, ValidationError};
pub use validator::validate;

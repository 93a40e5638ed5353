//! Shared data model for Signon.
//!
//! This crate defines the types every other layer speaks:
//!
//! - **Form data** ([`FormInput`]) — what the user typed at the edge.
//! - **Persistence** ([`SessionRecord`], [`SessionTier`], and the payload
//!   codec on `SessionRecord`) — the one serialized shape and the two
//!   storage lifetimes it can live in.
//! - **Derived state** ([`SessionState`]) — the logged-in/logged-out view
//!   recomputed from record presence.
//! - **Errors** ([`ModelError`]) — what can go wrong encoding/decoding.
//!
//! # Architecture
//!
//! The model layer sits below everything else. It knows nothing about
//! credential checking or where payloads are kept — it only defines the
//! shapes:
//!
//! ```text
//! Model (types + codec) → Auth (identity) → Store (tiers) → Controller
//! ```

#[cfg(feature = "json")]
mod codec;
mod error;
mod types;

pub use error::ModelError;
pub use types::{FormInput, SessionRecord, SessionState, SessionTier};

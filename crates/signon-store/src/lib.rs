//! Session storage abstraction for Signon.
//!
//! Provides the [`SessionStore`] trait that abstracts over where
//! session records live, with two backends:
//!
//! - [`MemoryStore`] — everything in process memory; good for tests
//! - [`FileStore`] — persistent tier on disk, ephemeral tier in memory
//!
//! A store holds at most one record per [`SessionTier`]. The tiers
//! mirror a browser's `localStorage` / `sessionStorage` split: the
//! persistent tier survives closing and reopening the application,
//! the ephemeral tier does not. Records are stored as JSON payloads,
//! and any payload that no longer parses reads back as absent — a
//! corrupt store degrades to logged-out, never to an error at startup.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use signon_model::{SessionRecord, SessionState, SessionTier};

/// A two-tier home for session records.
///
/// Implementors provide the three tier primitives ([`write`],
/// [`read`], [`clear`]); the whole-store operations are derived from
/// them.
///
/// [`write`]: SessionStore::write
/// [`read`]: SessionStore::read
/// [`clear`]: SessionStore::clear
pub trait SessionStore: Send + Sync + 'static {
    /// Stores `record` in the given tier, replacing any previous
    /// record there.
    fn write(
        &mut self,
        tier: SessionTier,
        record: &SessionRecord,
    ) -> Result<(), StoreError>;

    /// Returns the record held in the given tier.
    ///
    /// Absent, unreadable, and malformed entries all read as `None`.
    fn read(&self, tier: SessionTier) -> Option<SessionRecord>;

    /// Removes whatever the given tier holds. Clearing an already
    /// empty tier is a no-op.
    fn clear(&mut self, tier: SessionTier);

    /// Clears both tiers.
    fn clear_all(&mut self) {
        self.clear(SessionTier::Persistent);
        self.clear(SessionTier::Ephemeral);
    }

    /// Models closing and reopening the application.
    ///
    /// The ephemeral tier is dropped, then the state a fresh start
    /// would see is derived from whatever the persistent tier still
    /// holds.
    fn simulate_restart(&mut self) -> SessionState {
        self.clear(SessionTier::Ephemeral);
        SessionState::from_record(self.read(SessionTier::Persistent))
    }
}

/// Decodes a stored payload, discarding anything malformed.
pub(crate) fn decode_or_discard(
    tier: SessionTier,
    payload: &str,
) -> Option<SessionRecord> {
    match SessionRecord::from_payload(payload) {
        Ok(record) => Some(record),
        Err(err) => {
            tracing::warn!(
                %tier,
                %err,
                "discarding malformed session record"
            );
            None
        }
    }
}

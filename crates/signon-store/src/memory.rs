//! In-memory store backend.

use signon_model::{SessionRecord, SessionTier};

use crate::{SessionStore, StoreError, decode_or_discard};

/// A [`SessionStore`] that keeps both tiers in process memory.
///
/// Payloads are held as JSON strings, the same framing [`FileStore`]
/// writes to disk, so malformed-entry handling can be exercised
/// without touching a filesystem. Tests can plant arbitrary payloads
/// through [`write_raw`] and inspect them through [`raw`].
///
/// [`FileStore`]: crate::FileStore
/// [`write_raw`]: MemoryStore::write_raw
/// [`raw`]: MemoryStore::raw
#[derive(Debug, Default)]
pub struct MemoryStore {
    persistent: Option<String>,
    ephemeral: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, tier: SessionTier) -> &Option<String> {
        match tier {
            SessionTier::Persistent => &self.persistent,
            SessionTier::Ephemeral => &self.ephemeral,
        }
    }

    fn slot_mut(&mut self, tier: SessionTier) -> &mut Option<String> {
        match tier {
            SessionTier::Persistent => &mut self.persistent,
            SessionTier::Ephemeral => &mut self.ephemeral,
        }
    }

    /// Plants a raw payload in a tier, bypassing serialization.
    pub fn write_raw(
        &mut self,
        tier: SessionTier,
        payload: impl Into<String>,
    ) {
        *self.slot_mut(tier) = Some(payload.into());
    }

    /// Returns the raw payload a tier holds, if any.
    pub fn raw(&self, tier: SessionTier) -> Option<&str> {
        self.slot(tier).as_deref()
    }
}

impl SessionStore for MemoryStore {
    fn write(
        &mut self,
        tier: SessionTier,
        record: &SessionRecord,
    ) -> Result<(), StoreError> {
        let payload = record.to_payload()?;
        *self.slot_mut(tier) = Some(payload);
        Ok(())
    }

    fn read(&self, tier: SessionTier) -> Option<SessionRecord> {
        let payload = self.slot(tier).as_deref()?;
        decode_or_discard(tier, payload)
    }

    fn clear(&mut self, tier: SessionTier) {
        *self.slot_mut(tier) = None;
    }
}

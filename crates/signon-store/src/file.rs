//! File-backed store backend.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use signon_model::{SessionRecord, SessionTier};

use crate::{SessionStore, StoreError, decode_or_discard};

/// Persistent-tier file name inside the store directory.
const SESSION_FILE: &str = "session.json";

/// A [`SessionStore`] whose persistent tier is a JSON file on disk.
///
/// The ephemeral tier never touches the filesystem: it lives in this
/// struct, so ending the process loses it exactly the way closing a
/// browser tab loses `sessionStorage`. Opening a new `FileStore` on
/// the same directory is therefore a real restart, not just a
/// simulated one.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
    ephemeral: Option<String>,
}

impl FileStore {
    /// Creates a store rooted at `dir`.
    ///
    /// The directory is created on first write, not here.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ephemeral: None,
        }
    }

    fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    fn write(
        &mut self,
        tier: SessionTier,
        record: &SessionRecord,
    ) -> Result<(), StoreError> {
        let payload = record.to_payload()?;
        match tier {
            SessionTier::Persistent => {
                fs::create_dir_all(&self.dir)
                    .map_err(StoreError::WriteFailed)?;
                fs::write(self.session_path(), payload)
                    .map_err(StoreError::WriteFailed)?;
            }
            SessionTier::Ephemeral => {
                self.ephemeral = Some(payload);
            }
        }
        tracing::debug!(
            %tier,
            username = %record.username,
            "session record written"
        );
        Ok(())
    }

    fn read(&self, tier: SessionTier) -> Option<SessionRecord> {
        match tier {
            SessionTier::Persistent => {
                let payload = match fs::read_to_string(self.session_path())
                {
                    Ok(payload) => payload,
                    Err(err) if err.kind() == ErrorKind::NotFound => {
                        return None;
                    }
                    Err(err) => {
                        tracing::warn!(
                            %err,
                            path = %self.session_path().display(),
                            "session file unreadable"
                        );
                        return None;
                    }
                };
                decode_or_discard(tier, &payload)
            }
            SessionTier::Ephemeral => {
                let payload = self.ephemeral.as_deref()?;
                decode_or_discard(tier, payload)
            }
        }
    }

    fn clear(&mut self, tier: SessionTier) {
        match tier {
            SessionTier::Persistent => {
                if let Err(err) = fs::remove_file(self.session_path()) {
                    if err.kind() != ErrorKind::NotFound {
                        tracing::warn!(
                            %err,
                            path = %self.session_path().display(),
                            "session file not removed"
                        );
                    }
                }
            }
            SessionTier::Ephemeral => {
                self.ephemeral = None;
            }
        }
    }
}

//! Conformance tests run against every [`SessionStore`] backend.
//!
//! The controller treats backends interchangeably, so both must agree
//! on tier behavior: what one tier holds is invisible to the other,
//! writes replace, clears are scoped, and a simulated restart keeps
//! only the persistent tier. Each check is written once against the
//! trait and run against [`MemoryStore`] and [`FileStore`].

use signon_model::{SessionRecord, SessionState, SessionTier};
use signon_store::{FileStore, MemoryStore, SessionStore};

fn record(username: &str) -> SessionRecord {
    SessionRecord::new(username)
}

fn file_store(dir: &tempfile::TempDir) -> FileStore {
    FileStore::new(dir.path())
}

// =========================================================================
// Shared checks
// =========================================================================

fn check_empty_store_reads_none(store: &impl SessionStore) {
    assert!(store.read(SessionTier::Persistent).is_none());
    assert!(store.read(SessionTier::Ephemeral).is_none());
}

fn check_round_trip(store: &mut impl SessionStore, tier: SessionTier) {
    let written = record("admin");
    store.write(tier, &written).unwrap();

    let read = store.read(tier).unwrap();
    assert_eq!(read, written);
}

fn check_tiers_are_independent(store: &mut impl SessionStore) {
    store.write(SessionTier::Persistent, &record("admin")).unwrap();
    store.write(SessionTier::Ephemeral, &record("user1")).unwrap();

    let persistent = store.read(SessionTier::Persistent).unwrap();
    let ephemeral = store.read(SessionTier::Ephemeral).unwrap();
    assert_eq!(persistent.username, "admin");
    assert_eq!(ephemeral.username, "user1");
}

fn check_write_replaces(store: &mut impl SessionStore) {
    store.write(SessionTier::Persistent, &record("admin")).unwrap();
    store.write(SessionTier::Persistent, &record("user1")).unwrap();

    let read = store.read(SessionTier::Persistent).unwrap();
    assert_eq!(read.username, "user1");
}

fn check_clear_is_scoped_to_tier(store: &mut impl SessionStore) {
    store.write(SessionTier::Persistent, &record("admin")).unwrap();
    store.write(SessionTier::Ephemeral, &record("admin")).unwrap();

    store.clear(SessionTier::Persistent);
    assert!(store.read(SessionTier::Persistent).is_none());
    assert!(store.read(SessionTier::Ephemeral).is_some());
}

fn check_clear_all_empties_both_tiers(store: &mut impl SessionStore) {
    store.write(SessionTier::Persistent, &record("admin")).unwrap();
    store.write(SessionTier::Ephemeral, &record("user1")).unwrap();

    store.clear_all();
    assert!(store.read(SessionTier::Persistent).is_none());
    assert!(store.read(SessionTier::Ephemeral).is_none());
}

fn check_restart_keeps_persistent_tier(store: &mut impl SessionStore) {
    store.write(SessionTier::Persistent, &record("admin")).unwrap();
    store.write(SessionTier::Ephemeral, &record("user1")).unwrap();

    let state = store.simulate_restart();
    assert_eq!(
        state,
        SessionState::LoggedIn {
            username: "admin".to_string()
        }
    );
    assert!(store.read(SessionTier::Ephemeral).is_none());
    assert!(store.read(SessionTier::Persistent).is_some());
}

fn check_restart_drops_ephemeral_only_session(
    store: &mut impl SessionStore,
) {
    store.write(SessionTier::Ephemeral, &record("user1")).unwrap();

    let state = store.simulate_restart();
    assert_eq!(state, SessionState::LoggedOut);
    assert!(store.read(SessionTier::Ephemeral).is_none());
}

fn check_restart_of_empty_store_is_logged_out(
    store: &mut impl SessionStore,
) {
    assert_eq!(store.simulate_restart(), SessionState::LoggedOut);
}

// =========================================================================
// MemoryStore
// =========================================================================

#[test]
fn test_memory_empty_store_reads_none() {
    check_empty_store_reads_none(&MemoryStore::new());
}

#[test]
fn test_memory_round_trips_each_tier() {
    check_round_trip(&mut MemoryStore::new(), SessionTier::Persistent);
    check_round_trip(&mut MemoryStore::new(), SessionTier::Ephemeral);
}

#[test]
fn test_memory_tiers_are_independent() {
    check_tiers_are_independent(&mut MemoryStore::new());
}

#[test]
fn test_memory_write_replaces() {
    check_write_replaces(&mut MemoryStore::new());
}

#[test]
fn test_memory_clear_is_scoped_to_tier() {
    check_clear_is_scoped_to_tier(&mut MemoryStore::new());
}

#[test]
fn test_memory_clear_all_empties_both_tiers() {
    check_clear_all_empties_both_tiers(&mut MemoryStore::new());
}

#[test]
fn test_memory_restart_keeps_persistent_tier() {
    check_restart_keeps_persistent_tier(&mut MemoryStore::new());
}

#[test]
fn test_memory_restart_drops_ephemeral_only_session() {
    check_restart_drops_ephemeral_only_session(&mut MemoryStore::new());
}

#[test]
fn test_memory_restart_of_empty_store_is_logged_out() {
    check_restart_of_empty_store_is_logged_out(&mut MemoryStore::new());
}

// =========================================================================
// FileStore
// =========================================================================

#[test]
fn test_file_empty_store_reads_none() {
    let dir = tempfile::tempdir().unwrap();
    check_empty_store_reads_none(&file_store(&dir));
}

#[test]
fn test_file_round_trips_each_tier() {
    let dir = tempfile::tempdir().unwrap();
    check_round_trip(&mut file_store(&dir), SessionTier::Persistent);

    let dir = tempfile::tempdir().unwrap();
    check_round_trip(&mut file_store(&dir), SessionTier::Ephemeral);
}

#[test]
fn test_file_tiers_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    check_tiers_are_independent(&mut file_store(&dir));
}

#[test]
fn test_file_write_replaces() {
    let dir = tempfile::tempdir().unwrap();
    check_write_replaces(&mut file_store(&dir));
}

#[test]
fn test_file_clear_is_scoped_to_tier() {
    let dir = tempfile::tempdir().unwrap();
    check_clear_is_scoped_to_tier(&mut file_store(&dir));
}

#[test]
fn test_file_clear_all_empties_both_tiers() {
    let dir = tempfile::tempdir().unwrap();
    check_clear_all_empties_both_tiers(&mut file_store(&dir));
}

#[test]
fn test_file_restart_keeps_persistent_tier() {
    let dir = tempfile::tempdir().unwrap();
    check_restart_keeps_persistent_tier(&mut file_store(&dir));
}

#[test]
fn test_file_restart_drops_ephemeral_only_session() {
    let dir = tempfile::tempdir().unwrap();
    check_restart_drops_ephemeral_only_session(&mut file_store(&dir));
}

#[test]
fn test_file_restart_of_empty_store_is_logged_out() {
    let dir = tempfile::tempdir().unwrap();
    check_restart_of_empty_store_is_logged_out(&mut file_store(&dir));
}

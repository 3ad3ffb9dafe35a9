//! Draft persistence: debounced shadow-saves of uncommitted form data.
//!
//! Drafts are independent of the committed progress record. A draft is
//! created on first edit, overwritten on every debounce flush, and
//! deleted when its step's data is folded into the record. Reads consult
//! the pending (not yet flushed) value first — debounce bounds write
//! amplification, not read freshness.
//!
//! Timing is caller-driven: `save` stamps a deadline from the caller's
//! `now` and `tick(now)` flushes whatever is due. One pending entry per
//! key; rescheduling a key replaces only that key's deadline.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::model::StepData;
use crate::storage::Storage;

/// Debounce window for a draft save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceWindow {
    /// Single-field edits: short window, coalesces fast typing.
    Field,
    /// Whole-form autosave: long window.
    Form,
}

impl DebounceWindow {
    fn duration(self) -> Duration {
        match self {
            DebounceWindow::Field => Duration::from_millis(300),
            DebounceWindow::Form => Duration::from_millis(3000),
        }
    }
}

struct Pending {
    value: String,
    deadline: Instant,
}

/// Debounced draft store over the flat key-value namespace.
pub struct DraftStore<'a> {
    storage: &'a Storage,
    pending: HashMap<String, Pending>,
}

impl<'a> DraftStore<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            pending: HashMap::new(),
        }
    }

    /// Schedules a debounced save of `data` under `key`.
    ///
    /// Rapid successive calls for the same key coalesce: the latest value
    /// wins and the deadline resets to `now + window`.
    pub fn save(&mut self, key: &str, data: &StepData, window: DebounceWindow, now: Instant) {
        let value = match serde_json::to_string(data) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize draft");
                return;
            }
        };
        self.pending.insert(
            key.to_string(),
            Pending {
                value,
                deadline: now + window.duration(),
            },
        );
    }

    /// Reads the draft under `key`: the pending value if one is waiting,
    /// otherwise the stored one. A corrupt stored draft reads as absent.
    pub fn load(&self, key: &str) -> Option<StepData> {
        let json = match self.pending.get(key) {
            Some(pending) => pending.value.clone(),
            None => match self.storage.get(key) {
                Ok(Some(json)) => json,
                Ok(None) => return None,
                Err(e) => {
                    tracing::warn!(key, error = %e, "failed to read draft");
                    return None;
                }
            },
        };
        match serde_json::from_str(&json) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(key, error = %e, "corrupt draft, treating as absent");
                None
            }
        }
    }

    /// Drops any pending write and removes the stored draft.
    ///
    /// Called once, right after a step's data is committed, so a
    /// completed step never resurrects a stale draft.
    pub fn clear(&mut self, key: &str) {
        self.pending.remove(key);
        if let Err(e) = self.storage.remove(key) {
            tracing::warn!(key, error = %e, "failed to remove draft");
        }
    }

    /// Flushes every pending write whose deadline has passed.
    ///
    /// Returns the number of physical writes performed.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(k, _)| k.clone())
            .collect();
        for key in &due {
            if let Some(pending) = self.pending.remove(key) {
                self.write(key, &pending.value);
            }
        }
        due.len()
    }

    /// Flushes everything regardless of deadlines. Teardown path: a
    /// pending keystroke must not be lost because the app closed inside
    /// the debounce window.
    pub fn flush_all(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for (key, p) in pending {
            self.write(&key, &p.value);
        }
    }

    /// Number of writes currently waiting on their debounce window.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set(key, value) {
            tracing::warn!(key, error = %e, "failed to write draft");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::clock::{Clock, ManualClock};
    use crate::model::{ProfileData, StepId};

    fn profile(name: &str) -> StepData {
        StepData::Profile(ProfileData {
            display_name: name.into(),
            ..ProfileData::default()
        })
    }

    fn name_of(data: &StepData) -> &str {
        match data {
            StepData::Profile(p) => &p.display_name,
            _ => panic!("expected profile data"),
        }
    }

    #[test]
    fn draft_round_trip_after_debounce() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        drafts.save(&key, &profile("Ada"), DebounceWindow::Field, clock.now());
        // Nothing hits storage before the window elapses.
        clock.advance(Duration::from_millis(200));
        assert_eq!(drafts.tick(clock.now()), 0);
        assert!(storage.get(&key).unwrap().is_none());

        clock.advance(Duration::from_millis(150));
        assert_eq!(drafts.tick(clock.now()), 1);
        assert!(storage.get(&key).unwrap().is_some());

        let loaded = drafts.load(&key).unwrap();
        assert_eq!(name_of(&loaded), "Ada");
    }

    #[test]
    fn rapid_saves_coalesce_to_latest_value() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        for name in ["A", "Ad", "Ada"] {
            drafts.save(&key, &profile(name), DebounceWindow::Field, clock.now());
            clock.advance(Duration::from_millis(100));
            drafts.tick(clock.now());
        }
        assert_eq!(drafts.pending_count(), 1);

        clock.advance(Duration::from_millis(300));
        assert_eq!(drafts.tick(clock.now()), 1);

        let loaded = drafts.load(&key).unwrap();
        assert_eq!(name_of(&loaded), "Ada");
    }

    #[test]
    fn load_sees_pending_value_before_flush() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        drafts.save(&key, &profile("Ada"), DebounceWindow::Form, clock.now());
        let loaded = drafts.load(&key).unwrap();
        assert_eq!(name_of(&loaded), "Ada");
    }

    #[test]
    fn independent_keys_keep_independent_deadlines() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);

        drafts.save("a-draft", &profile("A"), DebounceWindow::Field, clock.now());
        clock.advance(Duration::from_millis(200));
        drafts.save("b-draft", &profile("B"), DebounceWindow::Field, clock.now());

        // Rescheduling `a` must not touch `b`'s deadline, and vice versa.
        clock.advance(Duration::from_millis(150));
        assert_eq!(drafts.tick(clock.now()), 1); // only a
        assert!(storage.get("a-draft").unwrap().is_some());
        assert!(storage.get("b-draft").unwrap().is_none());

        clock.advance(Duration::from_millis(200));
        assert_eq!(drafts.tick(clock.now()), 1); // now b
        assert!(storage.get("b-draft").unwrap().is_some());
    }

    #[test]
    fn clear_removes_pending_and_stored() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        drafts.save(&key, &profile("Ada"), DebounceWindow::Field, clock.now());
        clock.advance(Duration::from_millis(400));
        drafts.tick(clock.now());

        drafts.save(&key, &profile("Ada L"), DebounceWindow::Field, clock.now());
        drafts.clear(&key);

        assert!(drafts.load(&key).is_none());
        assert_eq!(drafts.pending_count(), 0);
        // A later tick must not resurrect the cleared draft.
        clock.advance(Duration::from_millis(400));
        drafts.tick(clock.now());
        assert!(storage.get(&key).unwrap().is_none());
    }

    #[test]
    fn flush_all_writes_inside_the_window() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let clock = ManualClock::new();
        let mut drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        drafts.save(&key, &profile("Ada"), DebounceWindow::Form, clock.now());
        drafts.flush_all();

        assert!(storage.get(&key).unwrap().is_some());
        assert_eq!(drafts.pending_count(), 0);
    }

    #[test]
    fn corrupt_stored_draft_reads_as_absent() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        let drafts = DraftStore::new(&storage);
        let key = StepId::ProfileSetup.draft_key();

        storage.set(&key, "{definitely not json").unwrap();
        assert!(drafts.load(&key).is_none());
    }
}

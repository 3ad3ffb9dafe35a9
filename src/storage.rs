//! Local persistence for onboarding state.
//!
//! Everything lives under one state directory:
//!
//! ```text
//! <root>/
//!   progress.json        # The single onboarding progress record
//!   kv/<key>             # Flat key-value entries (draft payloads)
//!   archive/<uuid>.json  # Dismissed progress records
//! ```
//!
//! The key-value namespace is flat and untransactional: each key is an
//! independent file, written whole on every set.

use std::{fs, io, path::PathBuf};

use uuid::Uuid;

use crate::model::OnboardingProgress;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// File-based storage for the progress record and draft key-value state.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory (and the `kv/` namespace) is created if missing.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("kv"))?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.waypoint/state/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".waypoint").join("state"))
    }

    // ── Progress record ──

    /// Loads the progress record, if one exists.
    ///
    /// A corrupt record is treated as absent: onboarding restarts rather
    /// than failing to open.
    pub fn load_progress(&self) -> Result<Option<OnboardingProgress>> {
        let path = self.root.join("progress.json");
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&json) {
            Ok(progress) => Ok(Some(progress)),
            Err(e) => {
                tracing::warn!(error = %e, "corrupt progress record, starting fresh");
                Ok(None)
            }
        }
    }

    /// Writes the progress record.
    pub fn save_progress(&self, progress: &OnboardingProgress) -> Result<()> {
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(self.root.join("progress.json"), json)?;
        Ok(())
    }

    /// Moves the progress record into the archive and clears the live one.
    ///
    /// Invoked when onboarding is dismissed; the archived copy keeps the
    /// record inspectable without it ever being resumed.
    pub fn archive_progress(&self, progress: &OnboardingProgress) -> Result<()> {
        let archive = self.root.join("archive");
        fs::create_dir_all(&archive)?;
        let json = serde_json::to_string_pretty(progress)?;
        fs::write(archive.join(format!("{}.json", progress.id)), json)?;

        let live = self.root.join("progress.json");
        if live.exists() {
            fs::remove_file(live)?;
        }
        Ok(())
    }

    /// Lists archived record ids, oldest-first by file order.
    pub fn archived_ids(&self) -> Result<Vec<Uuid>> {
        let mut ids = Vec::new();
        let entries = match fs::read_dir(self.root.join("archive")) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ids),
            Err(e) => return Err(e.into()),
        };
        for entry in entries {
            let entry = entry?;
            if let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str())
                && let Ok(id) = stem.parse::<Uuid>()
            {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }

    // ── Key-value namespace ──

    /// Reads the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.kv_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.kv_path(key), value)?;
        Ok(())
    }

    /// Removes the value under `key`. Idempotent: a missing key is fine.
    pub fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.kv_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn kv_path(&self, key: &str) -> PathBuf {
        self.root.join("kv").join(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::model::{StepData, StepId, TeamData};

    fn test_storage() -> (TempDir, Storage) {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path().join("state")).unwrap();
        (dir, storage)
    }

    #[test]
    fn progress_round_trip() {
        let (_dir, storage) = test_storage();
        assert!(storage.load_progress().unwrap().is_none());

        let mut progress = OnboardingProgress::new();
        progress.completed_steps.insert(StepId::Welcome);
        progress.current_step = StepId::ProfileSetup;
        progress.step_data.insert(
            StepId::TeamCreation,
            StepData::Team(TeamData {
                team_name: "Crew".into(),
                ..TeamData::default()
            }),
        );
        storage.save_progress(&progress).unwrap();

        let loaded = storage.load_progress().unwrap().unwrap();
        assert_eq!(loaded.id, progress.id);
        assert_eq!(loaded.current_step, StepId::ProfileSetup);
        assert!(loaded.completed_steps.contains(&StepId::Welcome));
        assert!(loaded.step_data.contains_key(&StepId::TeamCreation));
    }

    #[test]
    fn corrupt_progress_reads_as_absent() {
        let (dir, storage) = test_storage();
        fs::write(dir.path().join("state").join("progress.json"), "{not json").unwrap();
        assert!(storage.load_progress().unwrap().is_none());
    }

    #[test]
    fn archive_clears_live_record() {
        let (_dir, storage) = test_storage();
        let progress = OnboardingProgress::new();
        storage.save_progress(&progress).unwrap();

        storage.archive_progress(&progress).unwrap();

        assert!(storage.load_progress().unwrap().is_none());
        assert_eq!(storage.archived_ids().unwrap(), vec![progress.id]);
    }

    #[test]
    fn archive_without_live_record_is_fine() {
        let (_dir, storage) = test_storage();
        let progress = OnboardingProgress::new();
        storage.archive_progress(&progress).unwrap();
        assert_eq!(storage.archived_ids().unwrap().len(), 1);
    }

    #[test]
    fn kv_get_set_remove() {
        let (_dir, storage) = test_storage();
        assert!(storage.get("profile-setup-draft").unwrap().is_none());

        storage.set("profile-setup-draft", "{\"x\":1}").unwrap();
        assert_eq!(
            storage.get("profile-setup-draft").unwrap().as_deref(),
            Some("{\"x\":1}")
        );

        storage.set("profile-setup-draft", "{\"x\":2}").unwrap();
        assert_eq!(
            storage.get("profile-setup-draft").unwrap().as_deref(),
            Some("{\"x\":2}")
        );

        storage.remove("profile-setup-draft").unwrap();
        assert!(storage.get("profile-setup-draft").unwrap().is_none());

        // Removing again is a no-op.
        storage.remove("profile-setup-draft").unwrap();
    }
}

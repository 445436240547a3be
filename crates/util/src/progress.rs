//! Checklist progress persistence.
//!
//! This module provides a small JSON-backed store that records which
//! checklist items the user has checked, keyed by each checklist's storage
//! key. The file is written to the standard configuration directory
//! (`~/.config/trailhead/progress.json` on most platforms) and is safe to
//! read/write from multiple threads thanks to the internal `Mutex`.
//!
//! Persistence is a convenience, never load-bearing: a missing or corrupt
//! file degrades to empty progress, and callers are expected to treat a
//! write failure as "carry on with in-memory state".

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the progress file path.
pub const PROGRESS_PATH_ENV: &str = "TRAILHEAD_PROGRESS_PATH";

/// Default filename for the JSON payload.
pub const PROGRESS_FILE_NAME: &str = "progress.json";

/// Error surfaced when reading or writing progress fails.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("progress I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("progress serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted progress values: per storage key, the sorted indices of
/// checked items.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProgressPayload {
    #[serde(default)]
    pub checked: BTreeMap<String, Vec<usize>>,
    /// When the file was last written. Informational only.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Thread-safe progress store backed by a JSON file.
#[derive(Debug, Default)]
pub struct ProgressStore {
    path: PathBuf,
    payload: Mutex<ProgressPayload>,
    persist_to_disk: bool,
}

impl ProgressStore {
    /// Create a store rooted at the default path (or the
    /// [`PROGRESS_PATH_ENV`] override). A missing file yields empty
    /// progress; a corrupt file is logged and also yields empty progress.
    pub fn new() -> Result<Self, ProgressError> {
        let resolved_path = default_progress_path();
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config
    /// directory cannot be accessed, and in tests.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(ProgressPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file. Empty for ephemeral stores.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The set of checked item indices recorded under `key`.
    pub fn checked(&self, key: &str) -> BTreeSet<usize> {
        let payload = self.payload.lock().expect("progress lock poisoned");
        payload
            .checked
            .get(key)
            .map(|items| items.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Replace the checked set recorded under `key` and persist.
    ///
    /// An empty set removes the key entirely so the file does not
    /// accumulate stale entries.
    pub fn set_checked(&self, key: &str, items: &BTreeSet<usize>) -> Result<(), ProgressError> {
        let mut payload = self.payload.lock().expect("progress lock poisoned");
        if items.is_empty() {
            payload.checked.remove(key);
        } else {
            payload
                .checked
                .insert(key.to_string(), items.iter().copied().collect());
        }
        payload.updated_at = Some(Utc::now());
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    /// Flip item `index` under `key` and persist. Returns the item's new
    /// checked state.
    pub fn toggle(&self, key: &str, index: usize) -> Result<bool, ProgressError> {
        let mut items = self.checked(key);
        let now_checked = items.insert(index);
        if !now_checked {
            items.remove(&index);
        }
        self.set_checked(key, &items)?;
        Ok(now_checked)
    }

    /// All storage keys with at least one checked item.
    pub fn keys(&self) -> Vec<String> {
        let payload = self.payload.lock().expect("progress lock poisoned");
        payload.checked.keys().cloned().collect()
    }

    fn save_locked(&self, payload: &ProgressPayload) -> Result<(), ProgressError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_progress_path() -> PathBuf {
    if let Ok(path) = env::var(PROGRESS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trailhead")
        .join(PROGRESS_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<ProgressPayload, ProgressError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse progress file; starting with empty progress"
                );
                Ok(ProgressPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            Ok(ProgressPayload::default())
        }
        Err(error) => Err(ProgressError::Io(error)),
    }
}

//! Unlocked paintjob persistence
//!
//! The unlock set belongs to the player profile, not a save game, so it
//! lives in one small JSON document in profile storage:
//!
//! ```json
//! {
//!    "unlockedPaintjobs": ["x1", "x2"]
//! }
//! ```
//!
//! Reads only ever add ids to the in-memory set. Every save re-reads
//! the document first so ids written by someone else since our last
//! read are kept, and a save with nothing unlocked writes nothing, so
//! an unpopulated set can never clobber a good document.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::io;
use tracing::{debug, info};

use crate::config::LiverySettings;
use crate::error::{LiveryError, Result};
use crate::storage::{FsProfileStorage, ProfileStorage};

/// On-disk form of the unlock set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnlockDocument {
    #[serde(default)]
    pub unlocked_paintjobs: Vec<String>,
}

impl UnlockDocument {
    /// Parse a document; blank text counts as an empty document
    pub fn from_json(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text).map_err(|source| LiveryError::UnlockParse { source })
    }

    /// Serialize with a three-space indent
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"   ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Result of a successful save call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The document now holds this many ids
    Written(usize),
    /// Nothing unlocked in memory; the document was left alone
    SkippedEmpty,
}

/// The player's unlocked paintjobs
pub struct UnlockStore {
    storage: Box<dyn ProfileStorage>,
    file_name: String,
    unlocked: IndexSet<String>,
    loaded: bool,
}

impl std::fmt::Debug for UnlockStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnlockStore")
            .field("location", &self.storage.location(&self.file_name))
            .field("unlocked", &self.unlocked.len())
            .field("loaded", &self.loaded)
            .finish()
    }
}

impl UnlockStore {
    pub fn new(storage: impl ProfileStorage + 'static, file_name: impl Into<String>) -> Self {
        Self {
            storage: Box::new(storage),
            file_name: file_name.into(),
            unlocked: IndexSet::new(),
            loaded: false,
        }
    }

    /// Store in the configured profile directory
    pub fn from_settings(settings: &LiverySettings) -> anyhow::Result<Self> {
        let dir = settings.resolve_profile_dir()?;
        Ok(Self::new(
            FsProfileStorage::new(dir),
            settings.unlocks_file.clone(),
        ))
    }

    /// Read the document and merge its ids into memory.
    ///
    /// Returns how many ids were new. An absent document adds nothing.
    pub fn try_load(&mut self) -> Result<usize> {
        self.loaded = true;

        let text = match self.storage.read_text(&self.file_name) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("No unlocked paintjobs stored yet");
                return Ok(0);
            }
            Err(source) => {
                return Err(LiveryError::UnlockRead {
                    path: self.storage.location(&self.file_name),
                    source,
                })
            }
        };

        let document = UnlockDocument::from_json(&text)?;
        let before = self.unlocked.len();
        self.unlocked.extend(document.unlocked_paintjobs);
        Ok(self.unlocked.len() - before)
    }

    /// [`try_load`](Self::try_load), logging failures and treating them as nothing read
    pub fn load(&mut self) -> usize {
        self.try_load().unwrap_or_else(|error| {
            error.log();
            0
        })
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    /// Re-read, then write the full set. Skips the write when the set is empty.
    pub fn try_save(&mut self) -> Result<SaveOutcome> {
        self.load();

        let document = UnlockDocument {
            unlocked_paintjobs: self.unlocked.iter().cloned().collect(),
        };
        if document.unlocked_paintjobs.is_empty() {
            debug!("No unlocked paintjobs in memory, not saving");
            return Ok(SaveOutcome::SkippedEmpty);
        }

        let path = self.storage.location(&self.file_name);
        let text = document
            .to_json()
            .map_err(|error| LiveryError::UnlockWrite {
                path: path.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, error),
            })?;

        self.storage
            .write_text(&self.file_name, &text)
            .map_err(|source| LiveryError::UnlockWrite { path, source })?;

        debug!(count = document.unlocked_paintjobs.len(), "Saved unlocked paintjobs");
        Ok(SaveOutcome::Written(document.unlocked_paintjobs.len()))
    }

    /// [`try_save`](Self::try_save), logging failures. Returns whether a document was written.
    pub fn save(&mut self) -> bool {
        match self.try_save() {
            Ok(SaveOutcome::Written(_)) => true,
            Ok(SaveOutcome::SkippedEmpty) => false,
            Err(error) => {
                error.log();
                false
            }
        }
    }

    /// Mark a paintjob unlocked and save immediately.
    ///
    /// Returns whether the id was newly unlocked.
    pub fn unlock(&mut self, id: &str) -> bool {
        self.ensure_loaded();
        let added = self.unlocked.insert(id.to_string());
        if added {
            info!(id, "Unlocked paintjob");
        }
        self.save();
        added
    }

    pub fn is_unlocked(&mut self, id: &str) -> bool {
        self.ensure_loaded();
        self.unlocked.contains(id)
    }

    /// Unlocked ids in the order they were first seen
    pub fn unlocked_ids(&mut self) -> Vec<String> {
        self.ensure_loaded();
        self.unlocked.iter().cloned().collect()
    }

    pub fn len(&mut self) -> usize {
        self.ensure_loaded();
        self.unlocked.len()
    }

    pub fn is_empty(&mut self) -> bool {
        self.len() == 0
    }
}

//! Error types for catalog loading, registration and unlock persistence

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the paintjob core.
///
/// None of these are fatal to the host. Bulk operations collect them per
/// unit and keep going; the availability-first wrappers log them through
/// [`LiveryError::log`] and carry on.
#[derive(Error, Debug)]
pub enum LiveryError {
    /// A record is missing one of the required columns
    #[error("Paintjob #{row} in {source_id} by '{author}' has no {field}, skipping.")]
    MissingField {
        source_id: String,
        author: String,
        row: usize,
        field: &'static str,
    },

    /// A record reuses an id already claimed by an earlier source
    #[error("Paintjob with id {id} in {source_id} already exists in {existing_source}, skipping.")]
    DuplicateId {
        id: String,
        source_id: String,
        existing_source: String,
    },

    /// A record could not be decoded at all
    #[error("Unable to load paintjob #{row} in {source_id} by '{author}': {message}")]
    Record {
        source_id: String,
        author: String,
        row: usize,
        message: String,
    },

    /// The record file of a source exists but could not be read
    #[error("Unable to load paintjobs in {source_id} by '{author}' from file {path}")]
    SourceRead {
        source_id: String,
        author: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The hull a paintjob decorates does not exist in the host
    #[error("Did not add paintjob {id}. Hull with id {target_id} does not exist.")]
    UnknownTarget { id: String, target_id: String },

    /// The sprite a paintjob uses does not exist in the host
    #[error("Did not add paintjob {id}. Sprite with id {asset_id} does not exist.")]
    UnknownAsset { id: String, asset_id: String },

    /// The host failed to load the sprite while applying a paintjob
    #[error("Could not load sprite {asset_id} for paintjob {id}")]
    AssetUnavailable { id: String, asset_id: String },

    /// The unlock document could not be read
    #[error("Failed to read unlocked paintjobs from {path}")]
    UnlockRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The unlock document is corrupt
    #[error("Failed to parse unlocked paintjobs (corrupted or invalid format)")]
    UnlockParse {
        #[source]
        source: serde_json::Error,
    },

    /// The unlock document could not be written
    #[error("Failed to save unlocked paintjobs to {path}")]
    UnlockWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, LiveryError>;

impl LiveryError {
    /// Emit this error at the level matching its kind.
    ///
    /// Record and reference problems are content mistakes and only warn.
    /// Persistence failures mean the player may lose unlocks, so they
    /// are logged as errors.
    pub fn log(&self) {
        match self {
            LiveryError::UnlockRead { .. }
            | LiveryError::UnlockParse { .. }
            | LiveryError::UnlockWrite { .. }
            | LiveryError::UnknownTarget { .. }
            | LiveryError::UnknownAsset { .. } => {
                tracing::error!("{}", self.with_sources());
            }
            _ => tracing::warn!("{}", self.with_sources()),
        }
    }

    /// Render the message followed by its source chain
    pub fn with_sources(&self) -> String {
        let mut rendered = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(inner) = cause {
            rendered.push_str(": ");
            rendered.push_str(&inner.to_string());
            cause = inner.source();
        }
        rendered
    }
}

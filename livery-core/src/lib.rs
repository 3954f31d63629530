//! Livery - paintjob catalog and unlock-state management
//!
//! Content sources ship a record file listing paintjobs for ship hulls.
//! The [`catalog::CatalogLoader`] merges those files into one catalog, the
//! [`unlocks::UnlockStore`] remembers which paintjobs the player has
//! unlocked across save games, and the [`manager::PaintjobManager`] ties
//! both together for the rest of the mod ecosystem.
//!
//! ```text
//! ContentSource(s) ──► CatalogLoader ──► PaintjobManager ◄── host callbacks
//!                                           │
//!                                           ▼
//!                              UnlockStore ──► ProfileStorage
//! ```

pub mod catalog;
pub mod config;
pub mod decoration;
pub mod error;
pub mod host;
pub mod logging;
pub mod manager;
pub mod storage;
pub mod unlocks;

pub use catalog::{CatalogEntry, CatalogLoader, ContentSource, DirContentSource, LoadReport};
pub use config::LiverySettings;
pub use decoration::{Decorated, Decoration};
pub use error::{LiveryError, Result};
pub use host::{AssetStore, Host, NoticeBoard, TargetResolver};
pub use manager::{ApplyOutcome, EnabledState, PaintjobManager};
pub use storage::{FsProfileStorage, ProfileStorage};
pub use unlocks::{SaveOutcome, UnlockDocument, UnlockStore};

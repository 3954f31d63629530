//! Paintjob catalog
//!
//! Every enabled content source may ship a record file (by default
//! `data/config/magic_paintjobs.csv`). The loader reads each one, drops
//! malformed rows, and merges the rest into a single catalog where the
//! first source to claim an id keeps it.
//!
//! ```text
//! source "alpha" ─┐
//! source "beta"  ─┼─► CatalogLoader ─► LoadReport { entries, rejected }
//! source "gamma" ─┘
//! ```
//!
//! Loading only checks that required fields are present. Whether the
//! hull and sprite actually exist is checked later, when the manager
//! registers each entry against the host.

mod entry;
mod loader;
mod record;
mod source;

pub use entry::{CatalogEntry, HIDDEN_TAG, PERMANENT_TAG};
pub use loader::{CatalogLoader, LoadReport};
pub use record::RawRecord;
pub use source::{ContentSource, DirContentSource};

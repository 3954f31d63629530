//! Profile-scoped durable storage
//!
//! Files written here outlive any single save game. Writes go to a
//! sibling temp file first and are then renamed over the target, so a
//! crash mid-write leaves either the old or the new document.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Small text documents keyed by filename
pub trait ProfileStorage {
    /// Read a document. `Ok(None)` means it does not exist.
    fn read_text(&self, name: &str) -> io::Result<Option<String>>;

    /// Replace a document with `text`
    fn write_text(&self, name: &str, text: &str) -> io::Result<()>;

    /// Where a document lives, for diagnostics
    fn location(&self, name: &str) -> PathBuf;
}

/// [`ProfileStorage`] backed by a directory
#[derive(Debug, Clone)]
pub struct FsProfileStorage {
    root: PathBuf,
}

impl FsProfileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let relative = Path::new(name);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));
        if escapes || name.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("profile document name '{name}' must stay inside the profile directory"),
            ));
        }
        Ok(self.root.join(relative))
    }
}

impl ProfileStorage for FsProfileStorage {
    fn read_text(&self, name: &str) -> io::Result<Option<String>> {
        let path = self.resolve(name)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }

    fn write_text(&self, name: &str, text: &str) -> io::Result<()> {
        let path = self.resolve(name)?;
        write_text_atomic(&path, text)
    }

    fn location(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = temp_path_for(path);
    fs::write(&tmp_path, text)?;

    if let Err(error) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(error);
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document");
    path.with_file_name(format!("{file_name}.tmp"))
}

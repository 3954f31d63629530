//! Content sources that may ship paintjob records

use std::io;
use std::path::PathBuf;

/// An enabled content pack (a mod, in game terms)
pub trait ContentSource {
    /// Unique source id
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str {
        self.id()
    }

    /// Author, used in diagnostics
    fn author(&self) -> &str {
        ""
    }

    /// Raw bytes of a file at a logical path inside the source.
    ///
    /// `Ok(None)` means the source does not ship that file. Encoding is
    /// checked row by row by the reader, not here.
    fn read_file(&self, path: &str) -> io::Result<Option<Vec<u8>>>;
}

/// A content source unpacked into a directory
#[derive(Debug, Clone)]
pub struct DirContentSource {
    id: String,
    name: String,
    author: String,
    root: PathBuf,
}

impl DirContentSource {
    pub fn new(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            author: String::new(),
            root: root.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

impl ContentSource for DirContentSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn read_file(&self, path: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.root.join(path)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error),
        }
    }
}

use super::CorpusStore;
use crate::error::{CleanError, Result};
use std::collections::{HashMap, HashSet};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

/// In-memory store for tests. Tracks directories so a missing output
/// directory fails the same way it does on disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path, bytes.into());
        self
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<&[u8]> {
        self.files.get(path.as_ref()).map(Vec::as_slice)
    }

    pub fn text(&self, path: impl AsRef<Path>) -> Option<String> {
        self.contents(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.dirs.contains(parent),
            _ => true,
        }
    }
}

impl CorpusStore for InMemoryStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.get(path).cloned().ok_or_else(|| {
            CleanError::at_path(path, Error::new(ErrorKind::NotFound, "no such file"))
        })
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        if !self.parent_exists(path) {
            return Err(CleanError::at_path(
                path,
                Error::new(ErrorKind::NotFound, "parent directory does not exist"),
            ));
        }
        self.files.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }

    fn ensure_parent(&mut self, path: &Path) -> Result<()> {
        self.add_ancestors(path);
        Ok(())
    }
}

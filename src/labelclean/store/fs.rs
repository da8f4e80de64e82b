use super::CorpusStore;
use crate::error::{CleanError, Result};
use std::fs;
use std::path::Path;

/// Production store backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl CorpusStore for FileStore {
    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| CleanError::at_path(path, e))
    }

    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::write(path, bytes).map_err(|e| CleanError::at_path(path, e))
    }

    fn ensure_parent(&mut self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(|e| CleanError::at_path(parent, e))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        let mut store = FileStore::new();

        store.write(&path, b"a\nb\n").unwrap();
        assert_eq!(store.read(&path).unwrap(), b"a\nb\n");
    }

    #[test]
    fn write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.txt");
        fs::write(&path, "a much longer previous content\n").unwrap();

        let mut store = FileStore::new();
        store.write(&path, b"short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn missing_input_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        let err = FileStore::new().read(&path).unwrap_err();
        match err {
            CleanError::Path { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("labels.txt");

        let err = FileStore::new().write(&path, b"x").unwrap_err();
        assert!(matches!(err, CleanError::Path { .. }));
    }

    #[test]
    fn ensure_parent_creates_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repo").join("fasttext").join("labels.txt");
        let mut store = FileStore::new();

        store.ensure_parent(&path).unwrap();
        assert!(path.parent().unwrap().is_dir());
        store.write(&path, b"ok\n").unwrap();
    }

    #[test]
    fn ensure_parent_accepts_bare_filename() {
        FileStore::new()
            .ensure_parent(Path::new("labels.txt"))
            .unwrap();
    }
}

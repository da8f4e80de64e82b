use crate::error::{CleanError, Result};
use crate::model::Corpus;
use crate::store::CorpusStore;
use std::path::Path;
use tracing::debug;

/// Read `path` as UTF-8 and split it into lines.
pub fn run<S: CorpusStore>(store: &S, path: &Path) -> Result<Corpus> {
    let bytes = store.read(path)?;
    let byte_count = bytes.len();
    let text = String::from_utf8(bytes).map_err(|source| CleanError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = Corpus::from_text(&text);
    debug!(
        path = %path.display(),
        bytes = byte_count,
        lines = corpus.len(),
        "loaded corpus"
    );
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn loads_lines_with_terminators() {
        let store = InMemoryStore::new().with_file("data.txt", "Hi there\nBye\n");
        let corpus = run(&store, Path::new("data.txt")).unwrap();
        assert_eq!(corpus.lines(), &["Hi there\n", "Bye\n"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let store = InMemoryStore::new().with_file("data.txt", "a\nb");
        let corpus = run(&store, Path::new("data.txt")).unwrap();
        assert_eq!(corpus.lines(), &["a\n", "b"]);
    }

    #[test]
    fn empty_file_is_empty_corpus() {
        let store = InMemoryStore::new().with_file("data.txt", "");
        assert!(run(&store, Path::new("data.txt")).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let store = InMemoryStore::new();
        let err = run(&store, Path::new("data.txt")).unwrap_err();
        assert!(matches!(err, CleanError::Path { .. }));
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let store = InMemoryStore::new().with_file("data.txt", vec![b'o', b'k', 0xff, b'\n']);
        let err = run(&store, Path::new("data.txt")).unwrap_err();
        assert!(matches!(err, CleanError::Decode { .. }));
    }
}

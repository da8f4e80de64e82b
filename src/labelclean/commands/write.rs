use crate::error::Result;
use crate::model::Corpus;
use crate::store::CorpusStore;
use std::path::Path;
use tracing::debug;

/// Write the corpus lines back to back, returning the byte count.
pub fn run<S: CorpusStore>(
    store: &mut S,
    path: &Path,
    corpus: &Corpus,
    create_dir: bool,
) -> Result<usize> {
    if create_dir {
        store.ensure_parent(path)?;
    }

    let text = corpus.to_text();
    store.write(path, text.as_bytes())?;
    debug!(path = %path.display(), bytes = text.len(), "wrote corpus");
    Ok(text.len())
}

use crate::error::Result;
use crate::model::Corpus;
use crate::text::normalize_line;
use tracing::debug;

/// Normalize every line of the corpus, keeping order and count.
///
/// Returns the cleaned corpus and how many digit runs were spelled out.
pub fn run(corpus: Corpus) -> Result<(Corpus, usize)> {
    let mut numbers_spelled = 0;
    let mut cleaned = Vec::with_capacity(corpus.len());

    for line in corpus.into_lines() {
        let normalized = normalize_line(&line)?;
        numbers_spelled += normalized.numbers_spelled;
        cleaned.push(normalized.text);
    }

    debug!(lines = cleaned.len(), numbers_spelled, "normalized corpus");
    Ok((Corpus::new(cleaned), numbers_spelled))
}

/// Normalize standalone strings without touching any store.
pub fn preview<I: AsRef<str>>(texts: &[I]) -> Result<Vec<String>> {
    texts
        .iter()
        .map(|t| normalize_line(t.as_ref()).map(|n| n.text))
        .collect()
}

use crate::commands::{load, normalize, write, CleanReport, CmdMessage, CmdResult};
use crate::config::CleanConfig;
use crate::error::Result;
use crate::shuffle::{shuffle_corpus, Randomness};
use crate::store::CorpusStore;
use tracing::{debug, info};

/// Load, normalize, shuffle, and write the corpus described by `config`.
pub fn run<S: CorpusStore>(store: &mut S, config: &CleanConfig) -> Result<CmdResult> {
    let raw = load::run(store, &config.input)?;
    let lines = raw.len();

    let (mut cleaned, numbers_spelled) = normalize::run(raw)?;

    let randomness = Randomness::from_seed(config.seed);
    debug!(?randomness, "shuffling corpus");
    shuffle_corpus(&mut cleaned, randomness);

    let bytes_written = write::run(
        store,
        &config.output,
        &cleaned,
        config.create_output_dir,
    )?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        lines,
        numbers_spelled,
        "clean run finished"
    );

    let mut result = CmdResult::default().with_report(CleanReport {
        input: config.input.clone(),
        output: config.output.clone(),
        lines,
        numbers_spelled,
        bytes_written,
        randomness,
    });
    if lines == 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} is empty; wrote an empty label file",
            config.input.display()
        )));
    }
    result.add_message(CmdMessage::info(format!(
        "{} lines, {} numbers spelled, written to {}",
        lines,
        numbers_spelled,
        config.output.display()
    )));
    result.add_message(CmdMessage::success(
        "Cleaned, converted numbers to words, and shuffled training data",
    ));
    Ok(result)
}

//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for the
//! binary. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints and never exits.
//!
//! `LabelCleanApi<S: CorpusStore>` is generic over storage:
//! - Production: `LabelCleanApi<FileStore>`
//! - Testing: `LabelCleanApi<InMemoryStore>`

use crate::commands;
use crate::config::CleanConfig;
use crate::error::Result;
use crate::store::CorpusStore;

pub struct LabelCleanApi<S: CorpusStore> {
    store: S,
    config: CleanConfig,
}

impl<S: CorpusStore> LabelCleanApi<S> {
    pub fn new(store: S, config: CleanConfig) -> Self {
        Self { store, config }
    }

    /// Run the whole load → normalize → shuffle → write pipeline.
    pub fn clean(&mut self) -> Result<commands::CmdResult> {
        commands::clean::run(&mut self.store, &self.config)
    }

    /// Normalize the given strings without reading or writing any file.
    pub fn normalize<I: AsRef<str>>(&self, texts: &[I]) -> Result<commands::CmdResult> {
        let lines = commands::normalize::preview(texts)?;
        Ok(commands::CmdResult::default().with_normalized_lines(lines))
    }

    pub fn config(&self) -> Result<commands::CmdResult> {
        Ok(commands::CmdResult::default().with_config(self.config.clone()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CleanReport, CmdMessage, CmdResult, MessageLevel};

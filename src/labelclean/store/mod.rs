//! # Storage Layer
//!
//! The [`CorpusStore`] trait is the only place the pipeline touches bytes on
//! disk. Commands take a store, so they can run against
//! [`memory::InMemoryStore`] in tests and [`fs::FileStore`] in production.
//!
//! Stores deal in raw bytes. Decoding and line splitting happen in the
//! load command, so both implementations fail the same way on bad input.

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait CorpusStore {
    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;

    /// Create or truncate `path` and write `bytes` to it.
    ///
    /// The parent directory must already exist.
    fn write(&mut self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Create every missing directory above `path`.
    fn ensure_parent(&mut self, path: &Path) -> Result<()>;
}

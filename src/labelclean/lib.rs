//! # labelclean Architecture
//!
//! labelclean turns a line-per-example text file into training labels for a
//! text classifier: punctuation stripped, lowercased, standalone numbers
//! spelled out, lines shuffled.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, main.rs)                               │
//! │  - Parses arguments, prints messages, owns the exit code    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, returns structured Result types             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → normalize → shuffle → write                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CorpusStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or calls
//! `std::process::exit`. Diagnostics go through `tracing`.
//!
//! ## Pipeline
//!
//! The whole corpus lives in memory as a [`model::Corpus`]. Line count is
//! preserved through normalization; the shuffle only changes order. Any I/O,
//! decoding, or number conversion failure aborts the run, and a failure while
//! writing may leave a truncated output file.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Pipeline stages and the full clean run
//! - [`text`]: Per-line normalization rules
//! - [`shuffle`]: Uniform shuffle, optionally seeded
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The `Corpus` type
//! - [`config`]: Run configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod shuffle;
pub mod store;
pub mod text;

use crate::config::CleanConfig;
use crate::shuffle::Randomness;
use std::path::PathBuf;

pub mod clean;
pub mod load;
pub mod normalize;
pub mod write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// What a full clean run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lines: usize,
    pub numbers_spelled: usize,
    pub bytes_written: usize,
    pub randomness: Randomness,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub report: Option<CleanReport>,
    pub normalized_lines: Vec<String>,
    pub config: Option<CleanConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_report(mut self, report: CleanReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_normalized_lines(mut self, lines: Vec<String>) -> Self {
        self.normalized_lines = lines;
        self
    }

    pub fn with_config(mut self, config: CleanConfig) -> Self {
        self.config = Some(config);
        self
    }
}

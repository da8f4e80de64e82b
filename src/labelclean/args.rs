use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "labelclean", version)]
#[command(about = "Clean and shuffle a text corpus into classifier training labels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input corpus (defaults to ./data.txt)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output label file (defaults to ../internal/repo/fasttext/labels.txt)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Seed the shuffle for a reproducible order
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// JSON config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean, number-spell, and shuffle the corpus (default)
    Clean,

    /// Print the normalized form of each argument
    #[command(alias = "n")]
    Normalize {
        /// Text to normalize
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,
    },

    /// Print the effective configuration
    Config,
}

use clap::Parser;
use colored::*;
use labelclean::api::{CmdMessage, LabelCleanApi, MessageLevel};
use labelclean::config::{CleanConfig, ConfigOverrides};
use labelclean::error::Result;
use labelclean::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let mut api = LabelCleanApi::new(FileStore::new(), config);

    match cli.command {
        Some(Commands::Clean) | None => handle_clean(&mut api),
        Some(Commands::Normalize { texts }) => handle_normalize(&api, texts),
        Some(Commands::Config) => handle_config(&api),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<CleanConfig> {
    let base = match &cli.config {
        Some(path) => CleanConfig::load(path)?,
        None => CleanConfig::default(),
    };
    Ok(base.with_overrides(ConfigOverrides {
        input: cli.input.clone(),
        output: cli.output.clone(),
        seed: cli.seed,
    }))
}

fn handle_clean(api: &mut LabelCleanApi<FileStore>) -> Result<()> {
    let result = api.clean()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_normalize(api: &LabelCleanApi<FileStore>, texts: Vec<String>) -> Result<()> {
    let result = api.normalize(texts.as_slice())?;
    for line in &result.normalized_lines {
        println!("{}", line);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &LabelCleanApi<FileStore>) -> Result<()> {
    let result = api.config()?;
    if let Some(config) = &result.config {
        println!("{}", config.to_json()?);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

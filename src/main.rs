use anyhow::Context;
use clap::Parser;
use git_stager::core::{config::Config, error::Result, git::GitRepo, print_error};
use git_stager::session::runner;
use log::LevelFilter;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-stager")]
#[command(about = "Interactive terminal UI for staging and committing git changes")]
#[command(version)]
struct Cli {
    /// Enable debug logging (written to a log file, never the screen)
    #[arg(long)]
    debug: bool,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        log::error!("{:?} error: {e}", e.kind());
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let repo = GitRepo::open(env::current_dir()?)?;
    runner::run(repo, &config)
}

/// The screen belongs to the UI, so log records go to a file.
/// Without `--debug` or `--log-file` logging stays off.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let path = match (&cli.log_file, cli.debug) {
        (Some(path), _) => path.clone(),
        (None, true) => env::temp_dir().join("git-stager.log"),
        (None, false) => return Ok(()),
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialise logging")?;

    log::debug!("Logging to {}", path.display());
    Ok(())
}

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use repo_glance::app;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "repo-glance")]
#[command(about = "Summarize a directory: git branch, latest commit, remote and contents")]
struct Cli {
    /// Directory to inspect
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = app::resolve_target(&cli.path)?;
    if !path.exists() {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!("path does not exist: {}", path.display()),
            )
            .exit();
    }

    print!("{}", app::summarize(&path)?);
    Ok(())
}

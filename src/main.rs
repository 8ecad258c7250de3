use anyhow::Context;
use clap::{ArgAction, Parser};
use std::io;
use std::path::PathBuf;
use strip_gremlins::{clean_stream, process_files, Outcome};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Strip invisible and irregular Unicode characters from text.
///
/// With no paths, reads standard input and writes the cleaned text to
/// standard output. Otherwise each file is rewritten in place when it changes.
#[derive(Parser, Debug)]
#[command(name = "strip-gremlins", version, about, long_about = None)]
struct Cli {
    /// Report files that would change without rewriting them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Files to clean in place
    paths: Vec<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("strip_gremlins={level}")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.paths.is_empty() {
        clean_stream(io::stdin().lock(), io::stdout().lock())
            .context("failed to clean standard input")?;
        return Ok(());
    }

    let summary = process_files(&cli.paths, cli.dry_run, |path, result| match result {
        Ok(Outcome::Cleaned(_)) => println!("strip-gremlins: cleaned {}", path.display()),
        Ok(Outcome::WouldClean(tally)) => println!(
            "strip-gremlins: would clean {} ({} replaced, {} removed)",
            path.display(),
            tally.replaced,
            tally.removed
        ),
        Ok(Outcome::Unchanged) => println!("strip-gremlins: no change {}", path.display()),
        Err(e) => eprintln!("strip-gremlins: {e}"),
    });
    debug!("{}", summary.display_status());

    // Skipped and failed paths never change the exit code
    Ok(())
}

//! Terkel CLI - Command-line interview coverage analyzer.

use clap::Parser;
use terkel_cli::commands;
use terkel_cli::repl;
use terkel_cli::{Cli, Command, Formatter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let formatter = Formatter::new(cli.format, !cli.no_color);

    let result = match cli.command {
        None | Some(Command::Interactive) => repl::run_repl(&formatter).await,
        Some(Command::Analyze(args)) => commands::execute_analyze(args, &formatter).await,
    };

    if let Err(e) = result {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

/// Initialize tracing (log to stderr).
fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

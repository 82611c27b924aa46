//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Terkel - Map interview transcripts onto outline questions.
#[derive(Debug, Parser)]
#[command(name = "terkel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value_t = CliFormat::Table)]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable info-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary counts plus the coverage table (default)
    Table,
    /// JSON document with records, summary, and dropped-line count
    Json,
    /// Summary counts only
    Summary,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze one transcript against an outline
    Analyze(AnalyzeArgs),

    /// Enter interactive mode
    Interactive,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Interview transcript file (pdf or docx)
    #[arg(short, long)]
    pub transcript: PathBuf,

    /// Question outline file (docx or txt)
    #[arg(short, long)]
    pub outline: PathBuf,

    /// DeepSeek API key (prompted for if omitted; kept in memory only)
    #[arg(short, long)]
    pub api_key: Option<String>,

    /// Write the coverage report to a CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// Fail on reply lines that cannot be parsed
    #[arg(long)]
    pub strict: bool,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["terkel"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, CliFormat::Table);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_analyze_command_parsing() {
        let cli = Cli::parse_from([
            "terkel",
            "analyze",
            "--transcript",
            "interview.pdf",
            "--outline",
            "outline.txt",
            "--strict",
            "--export",
            "report.csv",
        ]);

        match cli.command {
            Some(Command::Analyze(args)) => {
                assert_eq!(args.transcript, PathBuf::from("interview.pdf"));
                assert_eq!(args.outline, PathBuf::from("outline.txt"));
                assert!(args.strict);
                assert_eq!(args.export, Some(PathBuf::from("report.csv")));
                assert!(args.api_key.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_format_flag() {
        let cli = Cli::parse_from(["terkel", "--format", "json"]);
        assert_eq!(cli.format, CliFormat::Json);

        let cli = Cli::parse_from(["terkel", "--format", "summary"]);
        assert_eq!(cli.format, CliFormat::Summary);
    }

    #[test]
    fn test_analyze_requires_both_inputs() {
        let result = Cli::try_parse_from(["terkel", "analyze", "--transcript", "a.pdf"]);
        assert!(result.is_err());
    }
}

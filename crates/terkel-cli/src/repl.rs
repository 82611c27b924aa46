//! Interactive session mode.

use crate::commands::analyze::{read_api_key, report_dropped, run_analysis};
use crate::error::{CliError, Result};
use crate::export;
use crate::output::Formatter;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use terkel_analyzer::{AnalyzerConfig, Session};

/// Run the interactive session loop.
pub async fn run_repl(formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Terkel interactive mode - Type 'help' for commands, 'quit' to exit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| CliError::Readline(e.to_string()))?;
    let mut state = ReplState::new();

    loop {
        let prompt = if state.session.is_processed() {
            "terkel> "
        } else {
            "terkel (no results)> "
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                // Credentials stay out of history. History is in-memory
                // only; it is never written to disk.
                let first = line.split_whitespace().next().unwrap_or("");
                if first != "key" {
                    editor.add_history_entry(line).ok();
                }

                match parse_repl_command(line) {
                    Ok(ReplCommand::Quit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, &mut state, formatter).await {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'quit' to exit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Input error: {}", err)));
                break;
            }
        }
    }

    Ok(())
}

/// Per-session state for interactive mode.
struct ReplState {
    session: Session,
    api_key: Option<String>,
    config: AnalyzerConfig,
}

impl ReplState {
    fn new() -> Self {
        Self {
            session: Session::new(),
            api_key: None,
            config: AnalyzerConfig::default(),
        }
    }

    fn processed_session(&self) -> Result<&Session> {
        if !self.session.is_processed() {
            return Err(CliError::NoSession);
        }
        Ok(&self.session)
    }
}

/// Interactive command set.
#[derive(Debug, PartialEq, Eq)]
enum ReplCommand {
    Analyze {
        transcript: PathBuf,
        outline: PathBuf,
    },
    SetKey(Option<String>),
    Show,
    Summary,
    Transcript,
    Questions,
    Export(PathBuf),
    Restart,
    Help,
    Quit,
}

/// Parse one interactive command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    if parts.is_empty() {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    }

    match parts[0] {
        "analyze" => {
            if parts.len() != 3 {
                return Err(CliError::InvalidInput(
                    "Usage: analyze <transcript> <outline>".to_string(),
                ));
            }
            Ok(ReplCommand::Analyze {
                transcript: PathBuf::from(parts[1]),
                outline: PathBuf::from(parts[2]),
            })
        }
        "key" => Ok(ReplCommand::SetKey(parts.get(1).map(|s| s.to_string()))),
        "show" => Ok(ReplCommand::Show),
        "summary" => Ok(ReplCommand::Summary),
        "transcript" => Ok(ReplCommand::Transcript),
        "questions" => Ok(ReplCommand::Questions),
        "export" => {
            if parts.len() != 2 {
                return Err(CliError::InvalidInput(
                    "Usage: export <path.csv>".to_string(),
                ));
            }
            Ok(ReplCommand::Export(PathBuf::from(parts[1])))
        }
        "restart" => Ok(ReplCommand::Restart),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            parts[0]
        ))),
    }
}

/// Execute one interactive command.
async fn execute_repl_command(
    cmd: ReplCommand,
    state: &mut ReplState,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Analyze {
            transcript,
            outline,
        } => {
            let api_key = state.api_key.clone().ok_or(CliError::NoApiKey)?;
            run_analysis(
                &api_key,
                &state.config,
                &transcript,
                &outline,
                &mut state.session,
            )
            .await?;

            report_dropped(&state.session, formatter);
            println!(
                "{}",
                formatter.format_report(state.session.report(), state.session.dropped().len())?
            );
        }
        ReplCommand::SetKey(value) => {
            let key = match value {
                Some(key) => {
                    let key = key.trim().to_string();
                    if key.is_empty() {
                        return Err(CliError::InvalidInput(
                            "API key must not be empty".to_string(),
                        ));
                    }
                    key
                }
                None => read_api_key("API key: ")?,
            };

            state.api_key = Some(key);
            println!(
                "{}",
                formatter.success("API key set for this session (kept in memory only)")
            );
        }
        ReplCommand::Show => {
            let session = state.processed_session()?;
            println!("{}", formatter.report_table(session.report()));
        }
        ReplCommand::Summary => {
            let session = state.processed_session()?;
            println!("{}", formatter.report_summary(session.report()));
        }
        ReplCommand::Transcript => {
            let session = state.processed_session()?;
            println!("{}", session.transcript());
        }
        ReplCommand::Questions => {
            let session = state.processed_session()?;
            for (i, question) in session.questions().iter().enumerate() {
                println!("{}. {}", i + 1, question);
            }
        }
        ReplCommand::Export(path) => {
            let session = state.processed_session()?;
            export::write_csv(&path, session.report())?;
            println!(
                "{}",
                formatter.success(&format!(
                    "Exported {} row(s) to {}",
                    session.report().len(),
                    path.display()
                ))
            );
        }
        ReplCommand::Restart => {
            state.session.restart();
            println!("{}", formatter.info("Session reset"));
        }
        ReplCommand::Help | ReplCommand::Quit => unreachable!(),
    }

    Ok(())
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  analyze <transcript> <outline>  - Run a coverage analysis");
    println!("                                    (transcript: pdf|docx, outline: docx|txt)");
    println!("  key [value]                     - Set the API key for this session");
    println!("  show                            - Show the coverage table");
    println!("  summary                         - Show summary counts");
    println!("  transcript                      - Show the extracted transcript text");
    println!("  questions                       - List the parsed outline questions");
    println!("  export <path.csv>               - Export the report to CSV");
    println!("  restart                         - Reset the session");
    println!("  help, ?                         - Show this help");
    println!("  quit, exit, q                   - Exit");
    println!();
}

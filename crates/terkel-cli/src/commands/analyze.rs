//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use crate::export;
use crate::output::Formatter;
use rustyline::config::Configurer;
use rustyline::highlight::Highlighter;
use rustyline::history::DefaultHistory;
use rustyline::{ColorMode, Editor};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use terkel_analyzer::{Analyzer, AnalyzerConfig, ParsePolicy, Session, SourceFile};
use terkel_llm::DeepSeekProvider;

/// Execute the one-shot analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let config = load_config(args.config.as_deref(), args.strict)?;
    let api_key = resolve_api_key(args.api_key)?;

    let mut session = Session::new();
    run_analysis(
        &api_key,
        &config,
        &args.transcript,
        &args.outline,
        &mut session,
    )
    .await?;

    report_dropped(&session, formatter);
    println!(
        "{}",
        formatter.format_report(session.report(), session.dropped().len())?
    );

    if let Some(path) = args.export {
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

    Ok(())
}

/// Run one analysis against the DeepSeek API, replacing the session on
/// success.
pub async fn run_analysis(
    api_key: &str,
    config: &AnalyzerConfig,
    transcript_path: &Path,
    outline_path: &Path,
    session: &mut Session,
) -> Result<()> {
    let transcript = SourceFile::from_path(transcript_path)?;
    let outline = SourceFile::from_path(outline_path)?;

    let provider = DeepSeekProvider::new(api_key).with_timeout(config.request_timeout());
    let analyzer = Analyzer::new(provider, config.clone());

    analyzer.run(&transcript, &outline, session).await?;
    Ok(())
}

/// Surface dropped reply lines as a warning.
pub fn report_dropped(session: &Session, formatter: &Formatter) {
    let dropped = session.dropped().len();
    if dropped > 0 {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "{} reply line(s) could not be parsed into records",
                dropped
            ))
        );
    }
}

/// Load the analyzer configuration, applying the --strict override.
pub fn load_config(path: Option<&Path>, strict: bool) -> Result<AnalyzerConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            AnalyzerConfig::from_toml(&raw).map_err(CliError::Config)?
        }
        None => AnalyzerConfig::default(),
    };

    if strict {
        config.parse_policy = ParsePolicy::Strict;
    }

    config.validate().map_err(CliError::Config)?;
    Ok(config)
}

/// Take the key from the flag, or prompt for it with masked input.
fn resolve_api_key(flag: Option<String>) -> Result<String> {
    match flag {
        Some(key) => validate_key(key),
        None => read_api_key("DeepSeek API key: "),
    }
}

/// Line helper that renders every typed character as an asterisk.
struct MaskedPrompt;

impl rustyline::completion::Completer for MaskedPrompt {
    type Candidate = String;
}

impl rustyline::hint::Hinter for MaskedPrompt {
    type Hint = String;
}

impl rustyline::validate::Validator for MaskedPrompt {}

impl Highlighter for MaskedPrompt {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl rustyline::Helper for MaskedPrompt {}

/// Prompt for the API key without echoing it. The value lives only in
/// process memory.
pub fn read_api_key(prompt: &str) -> Result<String> {
    let mut editor: Editor<MaskedPrompt, DefaultHistory> =
        Editor::new().map_err(|e| CliError::Readline(e.to_string()))?;
    editor.set_helper(Some(MaskedPrompt));
    editor.set_color_mode(ColorMode::Forced); // highlighting carries the mask
    editor.set_auto_add_history(false);

    let key = editor
        .readline(prompt)
        .map_err(|e| CliError::Readline(e.to_string()))?;
    validate_key(key)
}

fn validate_key(key: String) -> Result<String> {
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(CliError::InvalidInput(
            "API key must not be empty".to_string(),
        ));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = load_config(None, false).unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Lenient);
    }

    #[test]
    fn test_strict_flag_overrides_policy() {
        let config = load_config(None, true).unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terkel.toml");
        fs::write(&path, AnalyzerConfig::strict().to_toml().unwrap()).unwrap();

        let config = load_config(Some(&path), false).unwrap();
        assert_eq!(config.parse_policy, ParsePolicy::Strict);
    }

    #[test]
    fn test_invalid_config_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "parse_policy = 12").unwrap();

        let result = load_config(Some(&path), false);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_key_validation() {
        assert!(validate_key("sk-abc".to_string()).is_ok());
        assert!(validate_key("  sk-abc \n".to_string()).is_ok());
        assert!(validate_key("   ".to_string()).is_err());
    }

    #[test]
    fn test_masked_prompt_hides_every_char() {
        let helper = MaskedPrompt;
        assert_eq!(helper.highlight("sk-secret", 0), "*********");
        assert_eq!(helper.highlight("密钥", 0), "**");
        assert!(helper.highlight_char("s", 0, false));
    }
}

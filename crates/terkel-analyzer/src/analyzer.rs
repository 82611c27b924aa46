//! Core Analyzer implementation

use tokio::time::timeout;
use tracing::{debug, info, warn};

use terkel_domain::{split_outline, ChatProvider};
use terkel_extract::extract_text;

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::parse_reply;
use crate::prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
use crate::session::Session;
use crate::types::{DocumentRole, SourceFile};

/// The Analyzer maps an interview transcript onto outline questions
pub struct Analyzer<P: ChatProvider> {
    provider: P,
    config: AnalyzerConfig,
}

impl<P> Analyzer<P>
where
    P: ChatProvider + Send + Sync,
{
    /// Create a new Analyzer
    pub fn new(provider: P, config: AnalyzerConfig) -> Self {
        Self { provider, config }
    }

    /// The configuration this Analyzer runs with
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Run a full analysis from input files, replacing the session on success.
    ///
    /// The session is only written once every stage has succeeded; any
    /// failure leaves it exactly as it was.
    pub async fn run(
        &self,
        transcript: &SourceFile,
        outline: &SourceFile,
        session: &mut Session,
    ) -> Result<(), AnalyzerError> {
        let transcript_text = self.read_document(transcript, DocumentRole::Transcript)?;
        let outline_text = self.read_document(outline, DocumentRole::Outline)?;

        let completed = self.analyze_text(&transcript_text, &outline_text).await?;
        *session = completed;
        Ok(())
    }

    /// Analyze already-extracted text and return the completed session
    pub async fn analyze_text(
        &self,
        transcript: &str,
        outline_text: &str,
    ) -> Result<Session, AnalyzerError> {
        if transcript.trim().is_empty() {
            return Err(AnalyzerError::EmptyTranscript);
        }

        let transcript_chars = transcript.chars().count();
        if transcript_chars > self.config.max_transcript_chars {
            return Err(AnalyzerError::TranscriptTooLong(
                transcript_chars,
                self.config.max_transcript_chars,
            ));
        }

        let questions = split_outline(outline_text);
        if questions.is_empty() {
            return Err(AnalyzerError::NoQuestions);
        }

        info!(
            "Starting analysis: {} questions, transcript length {} chars",
            questions.len(),
            transcript_chars
        );

        let prompt = PromptBuilder::new(transcript, &questions)
            .with_summary_limit(self.config.summary_char_limit)
            .build();

        debug!("Prompt length: {} chars", prompt.chars().count());

        let reply = timeout(
            self.config.request_timeout(),
            self.provider.complete(SYSTEM_INSTRUCTION, &prompt),
        )
        .await
        .map_err(|_| AnalyzerError::Timeout)?
        .map_err(|e| AnalyzerError::Provider(e.to_string()))?;

        debug!("Reply length: {} chars", reply.chars().count());

        let parsed = parse_reply(&reply, self.config.parse_policy)?;
        if !parsed.dropped.is_empty() {
            warn!(
                "Discarded {} unparseable reply line(s)",
                parsed.dropped.len()
            );
        }

        info!(
            "Analysis complete: {} of {} questions produced records",
            parsed.report.len(),
            questions.len()
        );

        Ok(Session::completed(
            transcript.to_string(),
            questions,
            parsed.report,
            parsed.dropped,
        ))
    }

    /// Check a file against its role and extract its text
    fn read_document(
        &self,
        file: &SourceFile,
        role: DocumentRole,
    ) -> Result<String, AnalyzerError> {
        let unsupported = || AnalyzerError::UnsupportedFile {
            role,
            name: file.name.clone(),
            expected: role.expected(),
        };

        let kind = file.kind().map_err(|_| unsupported())?;
        if !role.permits(kind) {
            return Err(unsupported());
        }

        debug!("Reading {} from '{}' ({})", role, file.name, kind);

        extract_text(&file.bytes, kind).map_err(|source| AnalyzerError::Extraction { role, source })
    }
}

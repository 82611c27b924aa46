//! Analysis session state

use terkel_domain::{CoverageReport, CoverageSummary, OutlineQuestion};

use crate::types::DroppedLine;

/// State of one analysis run.
///
/// A session is either fresh (nothing processed yet) or holds the complete
/// result of a run: transcript text, outline questions, the coverage report
/// and any lines that were dropped while parsing the reply. The Analyzer
/// replaces a session wholesale on success and leaves it untouched on
/// failure, so a session never shows a half-finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    transcript: String,
    questions: Vec<OutlineQuestion>,
    report: CoverageReport,
    dropped: Vec<DroppedLine>,
    processed: bool,
}

impl Session {
    /// Create a fresh, unprocessed session
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble the state of a finished run
    pub(crate) fn completed(
        transcript: String,
        questions: Vec<OutlineQuestion>,
        report: CoverageReport,
        dropped: Vec<DroppedLine>,
    ) -> Self {
        Self {
            transcript,
            questions,
            report,
            dropped,
            processed: true,
        }
    }

    /// The transcript text of the last run
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// The outline questions of the last run
    pub fn questions(&self) -> &[OutlineQuestion] {
        &self.questions
    }

    /// The coverage report of the last run
    pub fn report(&self) -> &CoverageReport {
        &self.report
    }

    /// Reply lines dropped while parsing the last run
    pub fn dropped(&self) -> &[DroppedLine] {
        &self.dropped
    }

    /// Whether this session holds a completed run
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Summary counts for the last run's report
    pub fn summary(&self) -> CoverageSummary {
        self.report.summarize()
    }

    /// Reset to a fresh, unprocessed session
    pub fn restart(&mut self) {
        *self = Session::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terkel_domain::{Coverage, CoverageRecord};

    #[test]
    fn test_new_session_is_unprocessed() {
        let session = Session::new();
        assert!(!session.is_processed());
        assert!(session.transcript().is_empty());
        assert!(session.questions().is_empty());
        assert!(session.report().is_empty());
        assert_eq!(session.summary().total, 0);
    }

    #[test]
    fn test_completed_session_exposes_state() {
        let questions = vec![OutlineQuestion::new("Q1".to_string()).unwrap()];
        let report = CoverageReport::from_records(vec![CoverageRecord::without_follow_up(
            "Q1",
            "s",
            Coverage::Full,
        )]);
        let session = Session::completed("text".to_string(), questions, report, Vec::new());

        assert!(session.is_processed());
        assert_eq!(session.transcript(), "text");
        assert_eq!(session.questions().len(), 1);
        assert_eq!(session.report().len(), 1);
        assert_eq!(session.summary().full, 1);
    }

    #[test]
    fn test_restart_clears_everything() {
        let questions = vec![OutlineQuestion::new("Q1".to_string()).unwrap()];
        let report = CoverageReport::from_records(vec![CoverageRecord::without_follow_up(
            "Q1",
            "s",
            Coverage::Full,
        )]);
        let mut session = Session::completed("text".to_string(), questions, report, Vec::new());

        session.restart();
        assert_eq!(session, Session::new());
    }
}

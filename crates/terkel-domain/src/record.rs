//! Record module - one parsed row of the model's reply

use crate::Coverage;

/// Sentinel used when the model omits a follow-up suggestion.
///
/// The field is never absent: a three-field reply line gets this literal
/// instead.
pub const NO_FOLLOW_UP: &str = "none";

/// The structured result of parsing one reply line.
///
/// `question` is the outline question as echoed by the model. It is not
/// cross-referenced against the original outline, so it may differ from any
/// [`OutlineQuestion`](crate::OutlineQuestion) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    /// The outline question as the model restated it
    pub question: String,

    /// Short excerpt or paraphrase of the matching transcript content
    pub summary: String,

    /// Coverage classification for this question
    pub coverage: Coverage,

    /// Suggested follow-up question, or [`NO_FOLLOW_UP`]
    pub follow_up: String,
}

impl CoverageRecord {
    /// Create a record with all four fields.
    pub fn new(
        question: impl Into<String>,
        summary: impl Into<String>,
        coverage: Coverage,
        follow_up: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            summary: summary.into(),
            coverage,
            follow_up: follow_up.into(),
        }
    }

    /// Create a record whose follow-up defaults to [`NO_FOLLOW_UP`].
    pub fn without_follow_up(
        question: impl Into<String>,
        summary: impl Into<String>,
        coverage: Coverage,
    ) -> Self {
        Self::new(question, summary, coverage, NO_FOLLOW_UP)
    }

    /// Whether the model supplied a concrete follow-up suggestion.
    pub fn has_follow_up(&self) -> bool {
        self.follow_up != NO_FOLLOW_UP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = CoverageRecord::new("Q1", "摘要内容", Coverage::Full, "追问细节");
        assert_eq!(record.question, "Q1");
        assert_eq!(record.summary, "摘要内容");
        assert_eq!(record.coverage, Coverage::Full);
        assert_eq!(record.follow_up, "追问细节");
        assert!(record.has_follow_up());
    }

    #[test]
    fn test_default_follow_up_sentinel() {
        let record = CoverageRecord::without_follow_up("Q1", "摘要", Coverage::Partial);
        assert_eq!(record.follow_up, NO_FOLLOW_UP);
        assert!(!record.has_follow_up());
    }
}

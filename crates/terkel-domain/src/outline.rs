//! Outline module - interview-guide questions and the line splitter

/// One question from the interview outline.
///
/// Identity is the text itself; order within the outline is preserved by the
/// containing sequence and no deduplication is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutlineQuestion(String);

impl OutlineQuestion {
    /// Create a question from already-trimmed text.
    ///
    /// # Errors
    /// Returns an error if the text is empty after trimming.
    pub fn new(value: String) -> Result<Self, String> {
        if value.trim().is_empty() {
            return Err("Outline question cannot be empty".to_string());
        }

        Ok(Self(value))
    }

    /// Get the question text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the question, yielding its text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for OutlineQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Split raw outline text into ordered questions, one per line.
///
/// Each line is trimmed; lines empty after trimming are dropped; original
/// order is preserved. No deduplication, no merging of continuation lines.
/// Empty or whitespace-only input yields an empty sequence.
pub fn split_outline(text: &str) -> Vec<OutlineQuestion> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| OutlineQuestion(line.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_question_creation() {
        let q = OutlineQuestion::new("你如何看待远程办公?".to_string()).unwrap();
        assert_eq!(q.as_str(), "你如何看待远程办公?");
    }

    #[test]
    fn test_empty_question_rejected() {
        assert!(OutlineQuestion::new(String::new()).is_err());
        assert!(OutlineQuestion::new("   ".to_string()).is_err());
    }

    #[test]
    fn test_split_drops_blank_lines() {
        let questions = split_outline("a\n\n  \nb");
        let texts: Vec<&str> = questions.iter().map(OutlineQuestion::as_str).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_split_trims_each_line() {
        let questions = split_outline("  第一题  \n\t第二题\t");
        let texts: Vec<&str> = questions.iter().map(OutlineQuestion::as_str).collect();
        assert_eq!(texts, vec!["第一题", "第二题"]);
    }

    #[test]
    fn test_split_preserves_order_and_duplicates() {
        let questions = split_outline("q1\nq2\nq1");
        let texts: Vec<&str> = questions.iter().map(OutlineQuestion::as_str).collect();
        assert_eq!(texts, vec!["q1", "q2", "q1"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_outline("").is_empty());
        assert!(split_outline("  \n \n\t").is_empty());
    }

    proptest! {
        /// Joining clean questions with newlines and re-splitting is the
        /// identity transformation.
        #[test]
        fn prop_split_idempotent_on_clean_input(
            questions in proptest::collection::vec("[a-zA-Z0-9?]{1,20}", 0..10)
        ) {
            let joined = questions.join("\n");
            let split: Vec<String> = split_outline(&joined)
                .into_iter()
                .map(OutlineQuestion::into_string)
                .collect();
            prop_assert_eq!(split, questions);
        }
    }
}

//! Coverage module - the three-value classification plus its escape hatch

/// Label the model is instructed to emit for a fully answered question.
pub const LABEL_FULL: &str = "充分";

/// Label for a partially answered question.
pub const LABEL_PARTIAL: &str = "部分";

/// Label for a question the transcript never touches.
pub const LABEL_NOT_COVERED: &str = "未覆盖";

/// Coverage classification for one outline question.
///
/// The model is instructed to answer with exactly one of three labels, but
/// replies are not guaranteed to comply. Anything outside the canonical set
/// is kept verbatim in `Unrecognized` so no reply text is lost and summary
/// counting cannot silently misclassify it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// Transcript fully answers the question (充分)
    Full,

    /// Transcript partially answers the question (部分)
    Partial,

    /// Transcript does not address the question (未覆盖)
    NotCovered,

    /// Any other label text, stored as given
    Unrecognized(String),
}

impl Coverage {
    /// Classify a label string.
    ///
    /// Matching is exact: no case folding, no trimming beyond what the
    /// caller already performed. Near-misses such as `"充分覆盖"` land in
    /// `Unrecognized`.
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_FULL => Coverage::Full,
            LABEL_PARTIAL => Coverage::Partial,
            LABEL_NOT_COVERED => Coverage::NotCovered,
            other => Coverage::Unrecognized(other.to_string()),
        }
    }

    /// Get the label text: canonical for recognized variants, verbatim for
    /// unrecognized ones. `Coverage::from_label(s).label() == s` always.
    pub fn label(&self) -> &str {
        match self {
            Coverage::Full => LABEL_FULL,
            Coverage::Partial => LABEL_PARTIAL,
            Coverage::NotCovered => LABEL_NOT_COVERED,
            Coverage::Unrecognized(text) => text,
        }
    }

    /// Whether the label is one of the three canonical values.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Coverage::Unrecognized(_))
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<&str> for Coverage {
    fn from(label: &str) -> Self {
        Coverage::from_label(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_canonical_labels() {
        assert_eq!(Coverage::from_label("充分"), Coverage::Full);
        assert_eq!(Coverage::from_label("部分"), Coverage::Partial);
        assert_eq!(Coverage::from_label("未覆盖"), Coverage::NotCovered);
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(
            Coverage::from_label("充分覆盖"),
            Coverage::Unrecognized("充分覆盖".to_string())
        );
        assert_eq!(
            Coverage::from_label(" 充分"),
            Coverage::Unrecognized(" 充分".to_string())
        );
        assert_eq!(
            Coverage::from_label("FULL"),
            Coverage::Unrecognized("FULL".to_string())
        );
    }

    #[test]
    fn test_recognized_flag() {
        assert!(Coverage::Full.is_recognized());
        assert!(Coverage::Partial.is_recognized());
        assert!(Coverage::NotCovered.is_recognized());
        assert!(!Coverage::from_label("basically covered").is_recognized());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Coverage::Full.to_string(), "充分");
        assert_eq!(Coverage::from_label("其他").to_string(), "其他");
    }

    proptest! {
        /// Any label survives a from_label/label round trip unchanged.
        #[test]
        fn prop_label_round_trip(label in "\\PC*") {
            let coverage = Coverage::from_label(&label);
            prop_assert_eq!(coverage.label(), label.as_str());
        }
    }
}

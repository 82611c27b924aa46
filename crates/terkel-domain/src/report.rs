//! Report module - the ordered record collection and its summary counts

use crate::{Coverage, CoverageRecord};

/// Ordered collection of coverage records, in reply order.
///
/// The model determines ordering; records are never re-sorted and never
/// reconciled against the original outline sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    records: Vec<CoverageRecord>,
}

/// Summary counts over one report.
///
/// Counting is exact-label only: `Partial` and unrecognized labels fall into
/// neither `full` nor `not_covered`, so `full + not_covered <= total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageSummary {
    /// Number of records in the report
    pub total: usize,

    /// Records classified exactly as 充分
    pub full: usize,

    /// Records classified exactly as 未覆盖
    pub not_covered: usize,
}

impl CoverageReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a report from records already in reply order.
    pub fn from_records(records: Vec<CoverageRecord>) -> Self {
        Self { records }
    }

    /// Append a record, preserving arrival order.
    pub fn push(&mut self, record: CoverageRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the report holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in reply order.
    pub fn iter(&self) -> std::slice::Iter<'_, CoverageRecord> {
        self.records.iter()
    }

    /// The records as a slice, in reply order.
    pub fn records(&self) -> &[CoverageRecord] {
        &self.records
    }

    /// Compute summary counts.
    pub fn summarize(&self) -> CoverageSummary {
        let full = self
            .records
            .iter()
            .filter(|r| r.coverage == Coverage::Full)
            .count();
        let not_covered = self
            .records
            .iter()
            .filter(|r| r.coverage == Coverage::NotCovered)
            .count();

        CoverageSummary {
            total: self.records.len(),
            full,
            not_covered,
        }
    }

    /// Records whose coverage label is outside the canonical three.
    pub fn unrecognized(&self) -> impl Iterator<Item = &CoverageRecord> {
        self.records.iter().filter(|r| !r.coverage.is_recognized())
    }
}

impl<'a> IntoIterator for &'a CoverageReport {
    type Item = &'a CoverageRecord;
    type IntoIter = std::slice::Iter<'a, CoverageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for CoverageReport {
    type Item = CoverageRecord;
    type IntoIter = std::vec::IntoIter<CoverageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record_with(coverage: &str) -> CoverageRecord {
        CoverageRecord::without_follow_up("q", "s", Coverage::from_label(coverage))
    }

    #[test]
    fn test_empty_report_summary() {
        let report = CoverageReport::new();
        let summary = report.summarize();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.full, 0);
        assert_eq!(summary.not_covered, 0);
    }

    #[test]
    fn test_summary_counts_exact_labels() {
        let report = CoverageReport::from_records(vec![
            record_with("充分"),
            record_with("充分"),
            record_with("部分"),
            record_with("未覆盖"),
        ]);
        let summary = report.summarize();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.full, 2);
        assert_eq!(summary.not_covered, 1);
    }

    #[test]
    fn test_unrecognized_counts_toward_neither_bucket() {
        let report = CoverageReport::from_records(vec![
            record_with("充分"),
            record_with("基本充分"),
            record_with("未 覆盖"),
        ]);
        let summary = report.summarize();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.full, 1);
        assert_eq!(summary.not_covered, 0);
        assert_eq!(report.unrecognized().count(), 2);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut report = CoverageReport::new();
        report.push(record_with("未覆盖"));
        report.push(record_with("充分"));
        let labels: Vec<&str> = report.iter().map(|r| r.coverage.label()).collect();
        assert_eq!(labels, vec!["未覆盖", "充分"]);
    }

    proptest! {
        /// The two counted buckets never exceed the total.
        #[test]
        fn prop_buckets_bounded_by_total(
            labels in proptest::collection::vec("\\PC{0,6}", 0..20)
        ) {
            let report = CoverageReport::from_records(
                labels.iter().map(|l| record_with(l)).collect()
            );
            let summary = report.summarize();
            prop_assert_eq!(summary.total, labels.len());
            prop_assert!(summary.full + summary.not_covered <= summary.total);
        }
    }
}

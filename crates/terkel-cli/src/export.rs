//! CSV export for coverage reports.

use crate::error::Result;
use std::path::Path;
use terkel_domain::CoverageReport;
use tracing::info;

/// Header row of an exported report.
pub const CSV_HEADER: [&str; 4] = [
    "Question",
    "Matched Content",
    "Coverage",
    "Suggested Follow-up",
];

/// Write a coverage report to a CSV file.
///
/// Values are written verbatim; the csv crate quotes fields as needed, so
/// separators and newlines inside a field survive a round trip. This is the
/// only place the tool writes to disk.
pub fn write_csv(path: &Path, report: &CoverageReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in report.iter() {
        writer.write_record([
            record.question.as_str(),
            record.summary.as_str(),
            record.coverage.label(),
            record.follow_up.as_str(),
        ])?;
    }
    writer.flush()?;

    info!("Exported {} record(s) to {}", report.len(), path.display());
    Ok(())
}

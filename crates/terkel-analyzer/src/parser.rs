//! Parse model replies into coverage records

use tracing::warn;

use terkel_domain::{Coverage, CoverageRecord};

use crate::config::ParsePolicy;
use crate::error::AnalyzerError;
use crate::types::{DropReason, DroppedLine, ParsedReply};

/// Character the model is asked to separate reply fields with
pub const FIELD_SEPARATOR: char = '|';

/// Parse a model reply into coverage records.
///
/// Each non-empty line is split on [`FIELD_SEPARATOR`] into trimmed fields.
/// Four or more fields make a full record (extra fields are ignored),
/// exactly three make a record with the default follow-up, and anything
/// shorter cannot form a record. What happens to unusable lines depends on
/// the policy: lenient drops them (recorded in [`ParsedReply::dropped`]),
/// strict fails the whole parse. Splitting is naive, so a separator inside
/// a field shifts everything after it.
///
/// An empty reply parses to an empty report.
pub fn parse_reply(reply: &str, policy: ParsePolicy) -> Result<ParsedReply, AnalyzerError> {
    let mut parsed = ParsedReply::default();

    for (idx, raw_line) in reply.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if !line.contains(FIELD_SEPARATOR) {
            drop_line(&mut parsed, line_no, line, DropReason::NoDelimiter, policy)?;
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() <= 2 {
            drop_line(&mut parsed, line_no, line, DropReason::TooFewFields, policy)?;
            continue;
        }

        let coverage = Coverage::from_label(fields[2]);
        if !coverage.is_recognized() {
            if policy == ParsePolicy::Strict {
                return Err(AnalyzerError::UnrecognizedCoverage {
                    line: line_no,
                    label: fields[2].to_string(),
                });
            }
            warn!(
                "Line {}: unrecognized coverage label '{}', keeping verbatim",
                line_no, fields[2]
            );
        }

        let record = if fields.len() >= 4 {
            CoverageRecord::new(fields[0], fields[1], coverage, fields[3])
        } else {
            CoverageRecord::without_follow_up(fields[0], fields[1], coverage)
        };
        parsed.report.push(record);
    }

    Ok(parsed)
}

/// Handle a line that cannot form a record
fn drop_line(
    parsed: &mut ParsedReply,
    line_no: usize,
    content: &str,
    reason: DropReason,
    policy: ParsePolicy,
) -> Result<(), AnalyzerError> {
    if policy == ParsePolicy::Strict {
        return Err(AnalyzerError::MalformedReplyLine {
            line: line_no,
            content: content.to_string(),
        });
    }
    warn!("Line {}: dropped ({}): {}", line_no, reason, content);
    parsed.dropped.push(DroppedLine {
        line_no,
        content: content.to_string(),
        reason,
    });
    Ok(())
}

//! Terkel Domain Layer
//!
//! This crate contains the core vocabulary and pure logic for Terkel, the
//! interview coverage analyzer. It stays free of I/O so the concepts can be
//! tested in isolation; infrastructure (document extraction, the model
//! client, presentation) lives in the other crates.
//!
//! ## Key Concepts
//!
//! - **OutlineQuestion**: one line of the interview guide, order-preserving
//! - **Coverage**: how well the transcript answers a question
//!   (充分 / 部分 / 未覆盖), with an explicit fallback for anything else
//! - **CoverageRecord**: one parsed row of the model's reply
//! - **CoverageReport**: the ordered record collection plus summary counts
//!
//! ## Architecture
//!
//! - Pure domain types and functions only
//! - Trait definitions for the model-client boundary
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod coverage;
pub mod outline;
pub mod record;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use coverage::Coverage;
pub use outline::{split_outline, OutlineQuestion};
pub use record::{CoverageRecord, NO_FOLLOW_UP};
pub use report::{CoverageReport, CoverageSummary};
pub use traits::ChatProvider;

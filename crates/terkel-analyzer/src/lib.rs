//! Terkel Analyzer
//!
//! Orchestrates the interview coverage pipeline: document text in, coverage
//! report out.
//!
//! # Overview
//!
//! A qualitative researcher supplies an interview transcript and the outline
//! of questions the interview was meant to cover. The analyzer asks a
//! chat-completion model to align transcript content to each question and
//! parses the delimited reply into a structured, ordered report: per
//! question, a matched-content summary, a coverage classification
//! (充分 / 部分 / 未覆盖), and a suggested follow-up.
//!
//! # Architecture
//!
//! ```text
//! Files → Extract → Split outline → Build prompt → Model → Parse → Session
//! ```
//!
//! Data flows strictly forward; the only loop is an explicit session restart
//! that wipes all derived state. A run either completes fully and replaces
//! the session wholesale, or fails and leaves the session untouched.
//!
//! # Example Usage
//!
//! ```no_run
//! use terkel_analyzer::{Analyzer, AnalyzerConfig, Session};
//! use terkel_llm::DeepSeekProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = DeepSeekProvider::new("sk-...");
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//!
//! let mut session = Session::new();
//! let transcript = "受访者: 我们去年完成了三个项目……";
//! let outline = "去年的项目进展如何?\n团队规模有变化吗?";
//!
//! session = analyzer.analyze_text(transcript, outline).await?;
//!
//! let summary = session.summary();
//! println!(
//!     "{} questions, {} fully covered, {} not covered",
//!     summary.total, summary.full, summary.not_covered
//! );
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
mod parser;
mod prompt;
mod session;
mod types;


pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, ParsePolicy};
pub use error::AnalyzerError;
pub use parser::{parse_reply, FIELD_SEPARATOR};
pub use prompt::{PromptBuilder, SYSTEM_INSTRUCTION};
pub use session::Session;
pub use types::{DocumentRole, DropReason, DroppedLine, ParsedReply, SourceFile};

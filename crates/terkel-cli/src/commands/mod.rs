//! Command implementations.

pub mod analyze;

pub use self::analyze::execute_analyze;

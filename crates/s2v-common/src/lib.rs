//! Common types and utilities for the s2v C#-to-VB converter.
//!
//! This crate provides foundational types used across all s2v crates:
//! - Error taxonomy (`ConvertError`)
//! - Per-unit batch reporting (`UnitReport`, `BatchReport`)
//! - Comment trivia shared by both grammars (`CommentTrivia`)

// Error taxonomy for unit translation
pub mod errors;
pub use errors::{ConvertError, ConvertResult};

// Per-unit batch reporting
pub mod report;
pub use report::{BatchReport, UnitOutcome, UnitReport};

// Comment trivia carried through translation
pub mod trivia;
pub use trivia::CommentTrivia;

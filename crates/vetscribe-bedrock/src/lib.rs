//! vetscribe-bedrock
//!
//! Bedrock model invocation and dictation parsing.

pub mod dictation;
pub mod error;

//! vetscribe-core
//!
//! Pure domain types and S3 key conventions. No AWS SDK dependency — this is
//! the shared vocabulary of the VetScribe system.

pub mod error;
pub mod keys;
pub mod models;

//! vetscribe-storage
//!
//! S3 operations. Thin wrapper around the AWS S3 SDK; records are stored as
//! JSON objects, one per key, with the serde shape as the wire format.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;

//! vetscribe-audit
//!
//! Structured audit events for record mutations.

pub mod events;

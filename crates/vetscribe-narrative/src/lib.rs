//! vetscribe-narrative
//!
//! The finding-to-narrative engine: patch merging, clause composition,
//! consistency advisories, and final document assembly. Every public
//! function is pure, synchronous, and total — no I/O, no shared state, no
//! panics for any well-typed record — and re-running any of them on an
//! unchanged record reproduces byte-identical output. Safe to call on every
//! keystroke.

pub mod advisor;
pub mod assemble;
pub mod compose;
pub mod merge;
mod text;

pub use compose::{Clause, ReportSection};

use vetscribe_core::models::exam::ExamRecord;
use vetscribe_core::models::mri::MriRecord;
use vetscribe_core::models::soap::SoapRecord;

/// Compose and assemble the exam summary in one call.
pub fn render_exam(record: &ExamRecord) -> String {
    assemble::compact(&compose::exam(record))
}

/// Compose and assemble the SOAP summary in one call.
pub fn render_soap(record: &SoapRecord) -> String {
    assemble::compact(&compose::soap(record))
}

/// Compose, advise, and assemble the MRI report in one call.
pub fn render_mri(record: &MriRecord) -> String {
    assemble::report(&compose::mri(record), &advisor::advise(record))
}

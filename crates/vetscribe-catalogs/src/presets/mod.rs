//! Preset libraries.
//!
//! A preset is a named patch. Applying one goes through the same merge path
//! as any hand-built partial update, so identity fields are untouched and an
//! unknown preset id leaves the record exactly as it was.

pub mod exam;
pub mod mri;
pub mod soap;

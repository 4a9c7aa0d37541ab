//! vetscribe-catalogs
//!
//! Static clinical catalogs: exam sections and their flag vocabularies, SOAP
//! body systems, stroke protocol fields, the MRI condition library, and the
//! template preset libraries. Pure data — no AWS dependency. Lookups return
//! `Option` for unknown ids and never fail.

pub mod conditions;
pub mod defs;
pub mod exam;
pub mod presets;
pub mod soap;
pub mod stroke;

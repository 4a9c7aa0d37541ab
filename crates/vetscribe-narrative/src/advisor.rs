//! Consistency advisor for the stroke protocol.
//!
//! Four independent rules over the stroke fields, evaluated in table order
//! on every composition. The returned sentences carry their leading spaces
//! and are appended verbatim to the end of the impression paragraph; rule
//! order is part of the output contract. Non-stroke reports get no
//! advisories; their differential sentence is composed with the condition
//! template instead.

use vetscribe_catalogs::conditions::STROKE_CONDITION_ID;
use vetscribe_core::models::mri::MriRecord;

use crate::text;

const NOT_CLASSIC_NOTE: &str =
    " Note: DWI/ADC pattern is not classic for acute restricted diffusion; please correlate clinically.";
const NO_SUSCEPTIBILITY_NOTE: &str =
    " Note: No T2* susceptibility detected; early or low-volume hemorrhage cannot be excluded.";
const RECLASSIFY_NOTE: &str =
    " Hemorrhagic features are present; consider reclassifying if clinically indicated.";

pub fn advise(record: &MriRecord) -> Vec<String> {
    if record.condition_id.as_deref() != Some(STROKE_CONDITION_ID) {
        return Vec::new();
    }
    let fields = &record.stroke;
    let impression = fields.impression_preset.as_str();
    let impression_lc = impression.to_lowercase();
    let mut notes = Vec::new();

    // Acute impression without the expected restricted-diffusion pair.
    if impression.contains("Acute")
        && !(fields.dwi.contains("hyperintense") && fields.adc.contains("Low"))
    {
        notes.push(NOT_CLASSIC_NOTE.to_string());
    }

    // Hemorrhage called but T2* clean. "Hemorrhagic" does not contain the
    // substring "hemorrhage", so this rule needs an impression that names
    // hemorrhage as a noun ("Intraparenchymal hemorrhage").
    if impression_lc.contains("hemorrhage") && fields.t2star == "No susceptibility" {
        notes.push(NO_SUSCEPTIBILITY_NOTE.to_string());
    }

    // Blood products seen but the impression does not mention hemorrhage at
    // all ("hemorrh" covers both the noun and adjective forms).
    if fields.heme_pattern != "None observed" && !impression_lc.contains("hemorrh") {
        notes.push(RECLASSIFY_NOTE.to_string());
    }

    let differential = record.differential.trim();
    if !differential.is_empty() {
        notes.push(text::differential_sentence(differential));
    }

    notes
}

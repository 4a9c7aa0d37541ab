//! Patch application.
//!
//! Patches carry no identity fields, so the signalment of `current` always
//! survives unchanged. Every field present in a patch replaces its
//! counterpart wholesale: a patched section state or stroke block lands as a
//! unit, never deep-merged with what was there. Fields absent from the patch
//! are left untouched.
//!
//! Preset application is atomic: an unknown preset id returns a clone of
//! `current` with nothing applied.

use vetscribe_catalogs::presets;
use vetscribe_core::models::exam::{ExamPatch, ExamRecord};
use vetscribe_core::models::mri::{MriPatch, MriRecord};
use vetscribe_core::models::soap::{SoapPatch, SoapRecord};

pub fn apply_exam_patch(current: &ExamRecord, patch: &ExamPatch) -> ExamRecord {
    let mut next = current.clone();
    if let Some(history) = &patch.history {
        next.history = history.clone();
    }
    for section in &patch.sections {
        next.sections.insert(section.section, section.state.clone());
    }
    next
}

pub fn apply_exam_preset(current: &ExamRecord, preset_id: &str) -> ExamRecord {
    match presets::exam::get(preset_id) {
        Some(preset) => apply_exam_patch(current, &preset.patch),
        None => current.clone(),
    }
}

pub fn apply_soap_patch(current: &SoapRecord, patch: &SoapPatch) -> SoapRecord {
    let mut next = current.clone();
    if let Some(attitude) = &patch.attitude {
        next.attitude = attitude.clone();
    }
    if let Some(appetite) = &patch.appetite {
        next.appetite = appetite.clone();
    }
    if let Some(hydration) = &patch.hydration {
        next.hydration = hydration.clone();
    }
    if let Some(vitals) = &patch.vitals {
        next.vitals = vitals.clone();
    }
    for system in &patch.systems {
        next.systems.insert(system.system, system.state.clone());
    }
    if let Some(assessment) = &patch.assessment {
        next.assessment = assessment.clone();
    }
    if let Some(plan) = &patch.plan {
        next.plan = plan.clone();
    }
    next
}

pub fn apply_soap_preset(current: &SoapRecord, preset_id: &str) -> SoapRecord {
    match presets::soap::get(preset_id) {
        Some(preset) => apply_soap_patch(current, &preset.patch),
        None => current.clone(),
    }
}

pub fn apply_mri_patch(current: &MriRecord, patch: &MriPatch) -> MriRecord {
    let mut next = current.clone();
    if let Some(study) = &patch.study {
        next.study = study.clone();
    }
    if let Some(condition_id) = &patch.condition_id {
        next.condition_id = Some(condition_id.clone());
    }
    if let Some(active_variants) = &patch.active_variants {
        next.active_variants = active_variants.clone();
    }
    if let Some(stroke) = &patch.stroke {
        next.stroke = stroke.clone();
    }
    if let Some(additional_findings) = &patch.additional_findings {
        next.additional_findings = additional_findings.clone();
    }
    if let Some(differential) = &patch.differential {
        next.differential = differential.clone();
    }
    next
}

pub fn apply_mri_preset(current: &MriRecord, preset_id: &str) -> MriRecord {
    match presets::mri::get(preset_id) {
        Some(preset) => apply_mri_patch(current, &preset.patch),
        None => current.clone(),
    }
}

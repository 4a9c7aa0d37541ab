//! Cross-checks between the static catalogs: every id a preset or default
//! refers to must resolve, and the fixed layouts must cover their domains.

use std::collections::BTreeSet;

use vetscribe_catalogs::conditions::{self, STROKE_CONDITION_ID};
use vetscribe_catalogs::exam::{self, SummaryEntry};
use vetscribe_catalogs::presets;
use vetscribe_catalogs::soap::{
    self, APPETITE_OPTIONS, ATTITUDE_OPTIONS, HYDRATION_OPTIONS,
};
use vetscribe_catalogs::stroke;
use vetscribe_core::models::exam::ExamSection;
use vetscribe_core::models::mri::StrokeFields;
use vetscribe_core::models::soap::BodySystem;

#[test]
fn section_defs_cover_every_section_in_enum_order() {
    let defs = exam::sections();
    assert_eq!(defs.len(), ExamSection::ALL.len());
    for (def, section) in defs.iter().zip(ExamSection::ALL) {
        assert_eq!(def.id, section);
        assert!(!def.label.is_empty());
        assert!(!def.normal_phrase.is_empty());
    }
    for section in ExamSection::ALL {
        assert_eq!(exam::section_def(section).id, section);
    }
}

#[test]
fn summary_layout_covers_every_section_exactly_once() {
    let mut seen = Vec::new();
    for entry in exam::summary_layout() {
        match entry {
            SummaryEntry::Single { section } => seen.push(*section),
            SummaryEntry::Group { members, .. } => {
                assert!(members.len() >= 2, "groups need at least two members");
                seen.extend(members.iter().copied());
            }
        }
    }
    assert_eq!(seen, ExamSection::ALL.to_vec());
}

#[test]
fn system_defs_cover_every_body_system_in_enum_order() {
    let defs = soap::systems();
    assert_eq!(defs.len(), BodySystem::ALL.len());
    for (def, system) in defs.iter().zip(BodySystem::ALL) {
        assert_eq!(def.id, system);
        assert_eq!(def.normal_phrase, soap::SYSTEM_NORMAL_PHRASE);
    }
}

#[test]
fn exam_presets_reference_only_cataloged_flags() {
    for preset in presets::exam::all() {
        for patch in &preset.patch.sections {
            for flag in patch.state.data.active() {
                assert!(
                    exam::flag_label(patch.section, flag).is_some(),
                    "preset {} uses unknown flag {flag} in {:?}",
                    preset.id,
                    patch.section,
                );
            }
        }
    }
}

#[test]
fn soap_presets_reference_only_cataloged_flags_and_options() {
    for preset in presets::soap::all() {
        for patch in &preset.patch.systems {
            for flag in patch.state.data.active() {
                assert!(
                    soap::flag_label(patch.system, flag).is_some(),
                    "preset {} uses unknown flag {flag} in {:?}",
                    preset.id,
                    patch.system,
                );
            }
        }
        if let Some(attitude) = &preset.patch.attitude {
            assert!(ATTITUDE_OPTIONS.contains(&attitude.as_str()));
        }
        if let Some(appetite) = &preset.patch.appetite {
            assert!(APPETITE_OPTIONS.contains(&appetite.as_str()));
        }
        if let Some(hydration) = &preset.patch.hydration {
            assert!(HYDRATION_OPTIONS.contains(&hydration.as_str()));
        }
    }
}

fn assert_cataloged(field_id: &str, value: &str) {
    let def = stroke::field_def(field_id).unwrap();
    if def.options.is_empty() {
        return; // free text
    }
    assert!(
        def.options.iter().any(|o| o == value),
        "{value:?} is not an option of {field_id}",
    );
}

fn assert_stroke_fields_cataloged(fields: &StrokeFields) {
    assert_cataloged("dwi", &fields.dwi);
    assert_cataloged("adc", &fields.adc);
    assert_cataloged("flair", &fields.flair);
    assert_cataloged("t2star", &fields.t2star);
    assert_cataloged("contrast", &fields.contrast);
    assert_cataloged("mass_effect", &fields.mass_effect);
    assert_cataloged("heme_pattern", &fields.heme_pattern);
    assert_cataloged("vessel", &fields.vessel);
    assert_cataloged("perfusion", &fields.perfusion);
    assert_cataloged("territory", &fields.territory);
    assert_cataloged("impression_preset", &fields.impression_preset);
}

#[test]
fn default_stroke_fields_use_cataloged_options() {
    assert_stroke_fields_cataloged(&StrokeFields::default());
}

#[test]
fn mri_presets_reference_known_conditions_and_options() {
    for preset in presets::mri::all() {
        let condition_id = preset.patch.condition_id.as_deref().unwrap();
        assert!(
            conditions::get(condition_id).is_some(),
            "preset {} selects unknown condition {condition_id}",
            preset.id,
        );
        if let Some(stroke_fields) = &preset.patch.stroke {
            assert_stroke_fields_cataloged(stroke_fields);
        }
    }
}

#[test]
fn stroke_condition_entry_exists_with_recommendations() {
    let entry = conditions::get(STROKE_CONDITION_ID).unwrap();
    assert_eq!(entry.display_name, "Ischemic infarct");
    assert!(!entry.recommendations.is_empty());
}

#[test]
fn condition_and_variant_ids_are_unique() {
    let mut ids = BTreeSet::new();
    for entry in conditions::all() {
        assert!(ids.insert(entry.id.as_str()), "duplicate condition {}", entry.id);
        let mut variant_ids = BTreeSet::new();
        for variant in &entry.variants {
            assert!(
                variant_ids.insert(variant.id.as_str()),
                "duplicate variant {} in {}",
                variant.id,
                entry.id,
            );
        }
    }
}

#[test]
fn preset_ids_are_unique_per_library() {
    let exam_ids: BTreeSet<_> = presets::exam::all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(exam_ids.len(), presets::exam::all().len());
    let soap_ids: BTreeSet<_> = presets::soap::all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(soap_ids.len(), presets::soap::all().len());
    let mri_ids: BTreeSet<_> = presets::mri::all().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(mri_ids.len(), presets::mri::all().len());
}

#[test]
fn unknown_ids_resolve_to_none() {
    assert!(conditions::get("nope").is_none());
    assert!(stroke::field_def("nope").is_none());
    assert!(presets::exam::get("nope").is_none());
    assert!(presets::soap::get("nope").is_none());
    assert!(presets::mri::get("nope").is_none());
    assert!(exam::flag_label(ExamSection::Gait, "nope").is_none());
    assert!(soap::flag_label(BodySystem::Ears, "nope").is_none());
}

#[test]
fn hemorrhagic_impression_options_cover_the_wording_variants() {
    let def = stroke::field_def("impression_preset").unwrap();
    assert!(def.options.iter().any(|o| o == "Hemorrhagic infarct"));
    assert!(def.options.iter().any(|o| o == "Intraparenchymal hemorrhage"));
}

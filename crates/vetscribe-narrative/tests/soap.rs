use vetscribe_core::models::signalment::Signalment;
use vetscribe_core::models::soap::{BodySystem, SoapRecord, Vitals};
use vetscribe_narrative::{compose, merge, render_soap};

fn record() -> SoapRecord {
    SoapRecord::new(
        Signalment {
            patient_name: "Pepper".to_string(),
            species: "Canine".to_string(),
            breed: "Beagle".to_string(),
            age: "6y".to_string(),
            sex: "MN".to_string(),
            examiner: "Dr. Lindqvist".to_string(),
        },
        jiff::civil::date(2026, 4, 20),
    )
}

#[test]
fn wellness_preset_renders_the_expected_note() {
    let record = merge::apply_soap_preset(&record(), "wellness_canine");
    let expected = "\
**Signalment**: Pepper (Canine, Beagle, 6y, MN)
**Subjective**: BAR, appetite normal, euhydrated
**Integument**: No significant findings
**Eyes**: No significant findings
**Ears**: No significant findings
**Oral cavity**: No significant findings
**Cardiovascular**: No significant findings
**Respiratory**: No significant findings
**Gastrointestinal**: No significant findings
**Urogenital**: No significant findings
**Musculoskeletal**: No significant findings
**Neurologic**: No significant findings
**Assessment**: Healthy adult dog; no significant abnormalities on physical examination.
**Plan**: Continue current diet and parasite preventives; recheck in 12 months.";
    assert_eq!(render_soap(&record), expected);
}

#[test]
fn subjective_line_lowercases_appetite_and_hydration() {
    let mut record = record();
    record.attitude = "QAR".to_string();
    record.appetite = "Reduced".to_string();
    record.hydration = "~5% dehydrated".to_string();
    let lines = compose::soap(&record);
    assert!(lines.contains(&"**Subjective**: QAR, appetite reduced, ~5% dehydrated".to_string()));
}

#[test]
fn vitals_line_skips_empty_fields() {
    let mut record = record();
    record.vitals = Vitals {
        temp_f: "101.5".to_string(),
        pulse: String::new(),
        resp: "24".to_string(),
        weight_kg: "9.1".to_string(),
        bcs: "5".to_string(),
    };
    let lines = compose::soap(&record);
    assert!(lines.contains(&"**Vitals**: T 101.5°F, R 24, wt 9.1 kg, BCS 5/9".to_string()));
}

#[test]
fn vitals_line_is_omitted_when_all_fields_are_empty() {
    let lines = compose::soap(&record());
    assert!(!lines.iter().any(|l| l.starts_with("**Vitals**")));
}

#[test]
fn system_notes_render_in_parentheses() {
    let mut record = record();
    let ears = record.system_mut(BodySystem::Ears);
    ears.set_abnormal();
    ears.set_flag("otitisExterna", true);
    ears.note = "left ear worse".to_string();
    let lines = compose::soap(&record);
    assert!(lines.contains(&"**Ears**: Otitis externa (left ear worse)".to_string()));
}

#[test]
fn unexamined_systems_are_omitted() {
    let mut record = record();
    record.system_mut(BodySystem::Cardiovascular).set_normal();
    let lines = compose::soap(&record);
    assert!(lines.contains(&"**Cardiovascular**: No significant findings".to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("**Respiratory**")));
}

#[test]
fn blank_record_with_blank_signalment_composes_nothing() {
    let record = SoapRecord::new(
        Signalment {
            patient_name: String::new(),
            species: String::new(),
            breed: String::new(),
            age: String::new(),
            sex: String::new(),
            examiner: String::new(),
        },
        jiff::civil::date(2026, 4, 20),
    );
    assert!(compose::soap(&record).is_empty());
    assert_eq!(render_soap(&record), "");
}

#[test]
fn back_pain_preset_marks_the_affected_systems() {
    let record = merge::apply_soap_preset(&record(), "back_pain_ivdd");
    let lines = compose::soap(&record);
    assert!(lines.contains(&"**Musculoskeletal**: Spinal pain on palpation".to_string()));
    assert!(lines.contains(&"**Neurologic**: Paresis, Ataxia".to_string()));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let record = merge::apply_soap_preset(&record(), "vestibular_presentation");
    assert_eq!(render_soap(&record), render_soap(&record));
}

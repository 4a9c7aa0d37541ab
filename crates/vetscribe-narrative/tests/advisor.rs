use vetscribe_core::models::mri::MriRecord;
use vetscribe_core::models::signalment::Signalment;
use vetscribe_narrative::{advisor, merge, render_mri};

const NOT_CLASSIC: &str =
    " Note: DWI/ADC pattern is not classic for acute restricted diffusion; please correlate clinically.";
const NO_SUSCEPTIBILITY: &str =
    " Note: No T2* susceptibility detected; early or low-volume hemorrhage cannot be excluded.";
const RECLASSIFY: &str =
    " Hemorrhagic features are present; consider reclassifying if clinically indicated.";

fn stroke_record() -> MriRecord {
    let record = MriRecord::new(Signalment {
        patient_name: "Bruno".to_string(),
        species: "Canine".to_string(),
        breed: "Greyhound".to_string(),
        age: "9y".to_string(),
        sex: "M".to_string(),
        examiner: "Dr. Moreau".to_string(),
    });
    merge::apply_mri_preset(&record, "acute_stroke")
}

#[test]
fn default_acute_stroke_raises_no_advisories() {
    assert!(advisor::advise(&stroke_record()).is_empty());
}

#[test]
fn pseudonormal_adc_flags_the_acute_impression() {
    let mut record = stroke_record();
    record.stroke.adc = "Near-normal (pseudonormalizing)".to_string();
    assert_eq!(advisor::advise(&record), vec![NOT_CLASSIC.to_string()]);
    let report = render_mri(&record);
    let impression_block = report
        .split("IMPRESSION:\n")
        .nth(1)
        .and_then(|rest| rest.split("\n\n").next())
        .unwrap();
    assert!(impression_block.ends_with(NOT_CLASSIC));
}

#[test]
fn hemorrhage_noun_with_clean_t2star_fires_the_susceptibility_rule() {
    let mut record = stroke_record();
    record.stroke.impression_preset = "Intraparenchymal hemorrhage".to_string();
    assert_eq!(advisor::advise(&record), vec![NO_SUSCEPTIBILITY.to_string()]);
}

#[test]
fn hemorrhagic_adjective_does_not_satisfy_the_noun_rule() {
    // "Hemorrhagic" never contains the substring "hemorrhage"; the rule
    // needs the noun form in the impression.
    let mut record = stroke_record();
    record.stroke.impression_preset = "Hemorrhagic infarct".to_string();
    assert!(advisor::advise(&record).is_empty());
}

#[test]
fn unexplained_blood_products_suggest_reclassification() {
    let mut record = stroke_record();
    record.stroke.impression_preset = "Subacute ischemic infarct".to_string();
    record.stroke.heme_pattern = "Petechial".to_string();
    assert_eq!(advisor::advise(&record), vec![RECLASSIFY.to_string()]);
}

#[test]
fn hemorrhagic_impression_suppresses_the_reclassification_rule() {
    let mut record = stroke_record();
    record.stroke.impression_preset = "Hemorrhagic infarct".to_string();
    record.stroke.heme_pattern = "Confluent hematoma".to_string();
    record.stroke.t2star = "Confluent susceptibility".to_string();
    assert!(advisor::advise(&record).is_empty());
}

#[test]
fn differential_text_is_sentence_cased_with_one_period() {
    let mut record = stroke_record();
    record.differential = "thromboembolism vs neoplasia.".to_string();
    assert_eq!(
        advisor::advise(&record),
        vec![" Differentials: Thromboembolism vs neoplasia.".to_string()],
    );
}

#[test]
fn rules_append_in_table_order() {
    let mut record = stroke_record();
    record.stroke.adc = "Near-normal (pseudonormalizing)".to_string();
    record.differential = "neoplasia".to_string();
    assert_eq!(
        advisor::advise(&record),
        vec![NOT_CLASSIC.to_string(), " Differentials: Neoplasia.".to_string()],
    );
}

#[test]
fn non_stroke_conditions_get_no_advisories() {
    let mut record = stroke_record();
    record.condition_id = Some("meningioma".to_string());
    record.stroke.heme_pattern = "Petechial".to_string();
    assert!(advisor::advise(&record).is_empty());
}

#[test]
fn records_without_a_condition_get_no_advisories() {
    let mut record = stroke_record();
    record.condition_id = None;
    record.differential = "vascular event".to_string();
    assert!(advisor::advise(&record).is_empty());
}

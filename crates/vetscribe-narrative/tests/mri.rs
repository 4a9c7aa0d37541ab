use vetscribe_core::models::mri::MriRecord;
use vetscribe_core::models::signalment::Signalment;
use vetscribe_narrative::{compose, merge, render_mri, ReportSection};

fn record() -> MriRecord {
    MriRecord::new(Signalment {
        patient_name: "Suki".to_string(),
        species: "Feline".to_string(),
        breed: "Domestic Shorthair".to_string(),
        age: "11y".to_string(),
        sex: "FS".to_string(),
        examiner: "Dr. Moreau".to_string(),
    })
}

fn stroke_record() -> MriRecord {
    merge::apply_mri_preset(&record(), "acute_stroke")
}

#[test]
fn default_acute_stroke_renders_the_expected_report() {
    let expected = "\
STUDY:
MRI brain (3T): sagittal/transverse/dorsal T2, FLAIR, T2*, DWI/ADC, T1 pre- and post-contrast

FINDINGS:
There is a focal region of markedly hyperintense DWI signal with corresponding low values on the ADC map, consistent with restricted diffusion.
FLAIR images demonstrate hyperintense signal in the corresponding territory.
No susceptibility artifact is identified on T2*-weighted images.
There is no abnormal contrast enhancement.
There is mild mass effect on the adjacent parenchyma.
No hemorrhagic component is observed. Intracranial arterial flow voids are preserved.
Distribution: right MCA territory.

IMPRESSION:
Acute non-hemorrhagic ischemic infarct.

RECOMMENDATIONS:
- Blood pressure measurement and urine protein:creatinine ratio
- Echocardiography and thyroid testing to screen for predisposing disease
- Recheck MRI in 4-6 weeks if signs progress";
    assert_eq!(render_mri(&stroke_record()), expected);
}

#[test]
fn fresh_record_renders_the_fallback_report() {
    let expected = "\
STUDY:
MRI brain (3T): sagittal/transverse/dorsal T2, FLAIR, T2*, DWI/ADC, T1 pre- and post-contrast

FINDINGS:
No structural abnormality identified.

IMPRESSION:
No acute intracranial lesion identified.";
    assert_eq!(render_mri(&record()), expected);
}

#[test]
fn unknown_condition_id_falls_back_without_error() {
    let mut record = record();
    record.condition_id = Some("made_up_condition".to_string());
    let report = render_mri(&record);
    assert!(report.contains("No structural abnormality identified."));
    assert!(report.contains("No acute intracranial lesion identified."));
}

#[test]
fn history_block_appears_when_clinical_history_is_set() {
    let mut record = stroke_record();
    record.study.clinical_history = "Peracute onset of left-sided circling.".to_string();
    let report = render_mri(&record);
    assert!(report.contains("HISTORY:\nPeracute onset of left-sided circling.\n\nFINDINGS:"));
}

#[test]
fn meningioma_composition_uses_the_condition_template() {
    let mut record = record();
    record.condition_id = Some("meningioma".to_string());
    let report = render_mri(&record);
    assert!(report.contains("Well-circumscribed, broad-based mass with a clear dural interface."));
    assert!(report.contains("T2: iso- to mildly hyperintense, heterogeneous if cystic or mineralized"));
    assert!(report.contains("Strong, uniform contrast enhancement with an enhancing dural tail."));
    assert!(report.contains(
        "IMPRESSION:\nFindings are most consistent with intracranial meningioma.  \
Differentials include histiocytic sarcoma, granular cell tumor, metastasis."
    ));
    assert!(report.contains("- Surgical planning CT if resection is considered"));
}

#[test]
fn variant_replaces_primary_findings_and_appends_the_rest() {
    let mut record = record();
    record.condition_id = Some("meningioma".to_string());
    record.active_variants = vec!["cystic".to_string()];
    let report = render_mri(&record);
    // Variant primary findings replace the base set outright.
    assert!(report.contains(
        "Well-circumscribed extra-axial mass with a large non-enhancing cystic component."
    ));
    assert!(!report.contains("broad-based mass with a clear dural interface"));
    // Variant signal characteristics and secondary findings concatenate.
    assert!(report.contains("T1: cyst fluid isointense to CSF"));
    assert!(report.contains("T2: iso- to mildly hyperintense"));
    assert!(report.contains("The cystic component follows fluid signal on all sequences."));
    assert!(report.contains("Findings are most consistent with intracranial meningioma (cystic)."));
}

#[test]
fn unknown_variant_ids_are_skipped() {
    let mut record = record();
    record.condition_id = Some("meningioma".to_string());
    let plain = render_mri(&record);
    record.active_variants = vec!["warp_drive".to_string()];
    assert_eq!(render_mri(&record), plain);
}

#[test]
fn additional_findings_join_the_findings_block() {
    let mut record = stroke_record();
    record.additional_findings = "Incidental fluid in the left tympanic bulla.".to_string();
    let clauses = compose::mri(&record);
    let findings: Vec<&str> = clauses
        .iter()
        .filter(|c| c.section == ReportSection::Findings)
        .map(|c| c.text.as_str())
        .collect();
    assert_eq!(
        findings.last().copied(),
        Some("Incidental fluid in the left tympanic bulla."),
    );
}

#[test]
fn hemorrhagic_stroke_preset_reports_blood_products_without_advisories() {
    let record = merge::apply_mri_preset(&record(), "hemorrhagic_stroke");
    let report = render_mri(&record);
    assert!(report.contains("T2*-weighted images show confluent susceptibility artifact."));
    assert!(report.contains("A confluent intralesional hematoma is present."));
    assert!(report.contains("IMPRESSION:\nHemorrhagic infarct.\n"));
    assert!(!report.contains("Note:"));
}

#[test]
fn user_differential_appends_to_the_condition_impression() {
    let mut record = record();
    record.condition_id = Some("glioma".to_string());
    record.differential = "lymphoma vs metastasis".to_string();
    let report = render_mri(&record);
    assert!(report.contains(" Differentials: Lymphoma vs metastasis."));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let mut record = stroke_record();
    record.differential = "hypertensive encephalopathy".to_string();
    assert_eq!(render_mri(&record), render_mri(&record));
}

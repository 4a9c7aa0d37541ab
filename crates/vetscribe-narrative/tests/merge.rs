use vetscribe_core::models::exam::{ExamPatch, ExamRecord, ExamSection, SectionPatch};
use vetscribe_core::models::flags::FlagList;
use vetscribe_core::models::mri::{MriRecord, StrokeFields};
use vetscribe_core::models::section::{SectionState, SectionStatus};
use vetscribe_core::models::signalment::Signalment;
use vetscribe_core::models::soap::{SoapPatch, SoapRecord};
use vetscribe_narrative::merge;

fn signalment() -> Signalment {
    Signalment {
        patient_name: "Mabel".to_string(),
        species: "Canine".to_string(),
        breed: "Dachshund".to_string(),
        age: "6y".to_string(),
        sex: "FS".to_string(),
        examiner: "Dr. Alvarez".to_string(),
    }
}

fn exam_record() -> ExamRecord {
    ExamRecord::new(signalment(), jiff::civil::date(2026, 3, 14))
}

#[test]
fn applying_a_preset_never_touches_the_signalment() {
    let record = exam_record();
    let next = merge::apply_exam_preset(&record, "t3_l3_myelopathy");
    assert_eq!(next.signalment.patient_name, "Mabel");
    assert_eq!(next.signalment.breed, "Dachshund");
    assert_eq!(next.signalment.examiner, "Dr. Alvarez");
    assert_eq!(next.id, record.id);
}

#[test]
fn patched_sections_replace_wholesale() {
    let mut record = exam_record();
    let gait = record.section_mut(ExamSection::Gait);
    gait.set_abnormal();
    gait.set_flag("lameness", true);

    let patch = ExamPatch {
        history: None,
        sections: vec![SectionPatch {
            section: ExamSection::Gait,
            state: SectionState::abnormal(FlagList::from_active(["paraparesis"])),
        }],
    };
    let next = merge::apply_exam_patch(&record, &patch);
    let gait = &next.sections[&ExamSection::Gait];
    let active: Vec<&str> = gait.data.active().collect();
    assert_eq!(active, vec!["paraparesis"], "old flags must not survive a patched section");
}

#[test]
fn fields_absent_from_the_patch_are_untouched() {
    let mut record = exam_record();
    record.history = "Acute onset pelvic limb weakness after jumping off the sofa.".to_string();
    let next = merge::apply_exam_preset(&record, "t3_l3_myelopathy");
    assert_eq!(next.history, record.history);
}

#[test]
fn unknown_preset_id_is_a_no_op() {
    let mut record = exam_record();
    record.section_mut(ExamSection::Palpation).set_abnormal();
    let next = merge::apply_exam_preset(&record, "bogus_preset");
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        serde_json::to_value(&record).unwrap(),
    );
}

#[test]
fn preset_sets_status_and_flags_in_one_step() {
    let next = merge::apply_exam_preset(&exam_record(), "t3_l3_myelopathy");
    let gait = &next.sections[&ExamSection::Gait];
    assert_eq!(gait.status, SectionStatus::Abnormal);
    let active: Vec<&str> = gait.data.active().collect();
    assert_eq!(active, vec!["paraparesis", "ataxiaProprioceptive"]);
    let mental = &next.sections[&ExamSection::MentalStatus];
    assert_eq!(mental.status, SectionStatus::Normal);
    assert!(mental.data.is_empty());
}

#[test]
fn soap_patch_replaces_only_named_fields() {
    let mut record = SoapRecord::new(signalment(), jiff::civil::date(2026, 3, 14));
    record.plan = "Recheck in two weeks.".to_string();
    let patch = SoapPatch {
        attitude: Some("QAR".to_string()),
        ..SoapPatch::default()
    };
    let next = merge::apply_soap_patch(&record, &patch);
    assert_eq!(next.attitude, "QAR");
    assert_eq!(next.plan, "Recheck in two weeks.");
}

#[test]
fn mri_preset_sets_condition_and_resets_variants() {
    let mut record = MriRecord::new(signalment());
    record.condition_id = Some("meningioma".to_string());
    record.active_variants = vec!["cystic".to_string()];
    let next = merge::apply_mri_preset(&record, "acute_stroke");
    assert_eq!(next.condition_id.as_deref(), Some("ischemic_infarct"));
    assert!(next.active_variants.is_empty());
    assert_eq!(next.stroke, StrokeFields::default());
    assert_eq!(next.signalment.patient_name, "Mabel");
}

#[test]
fn mri_preset_leaves_unpatched_fields_alone() {
    let mut record = MriRecord::new(signalment());
    record.differential = "thromboembolism".to_string();
    record.study.clinical_history = "Peracute onset circling.".to_string();
    let next = merge::apply_mri_preset(&record, "acute_stroke");
    assert_eq!(next.differential, "thromboembolism");
    assert_eq!(next.study.clinical_history, "Peracute onset circling.");
}

#[test]
fn unknown_mri_preset_is_a_no_op() {
    let record = MriRecord::new(signalment());
    let next = merge::apply_mri_preset(&record, "nope");
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        serde_json::to_value(&record).unwrap(),
    );
}

use vetscribe_core::models::exam::{ExamRecord, ExamSection};
use vetscribe_core::models::flags::FlagList;
use vetscribe_core::models::section::{SectionState, SectionStatus};
use vetscribe_core::models::signalment::Signalment;
use vetscribe_narrative::{compose, merge, render_exam};

const CRANIAL_NERVE_SECTIONS: [ExamSection; 8] = [
    ExamSection::MenaceResponse,
    ExamSection::PupilsPlr,
    ExamSection::PalpebralReflex,
    ExamSection::FacialSymmetry,
    ExamSection::Nystagmus,
    ExamSection::Strabismus,
    ExamSection::GagSwallow,
    ExamSection::Tongue,
];

fn record() -> ExamRecord {
    ExamRecord::new(
        Signalment {
            patient_name: "Otto".to_string(),
            species: "Canine".to_string(),
            breed: "French Bulldog".to_string(),
            age: "4y".to_string(),
            sex: "MN".to_string(),
            examiner: "Dr. Osei".to_string(),
        },
        jiff::civil::date(2026, 5, 2),
    )
}

#[test]
fn all_normal_cranial_nerves_collapse_to_the_group_phrase() {
    let mut record = record();
    for section in CRANIAL_NERVE_SECTIONS {
        record.section_mut(section).set_normal();
    }
    let lines = compose::exam(&record);
    assert!(
        lines.contains(&"**Cranial nerves**: No cranial nerve deficits detected".to_string()),
        "got: {lines:?}",
    );
}

#[test]
fn abnormal_mental_status_lists_flags_in_insertion_order() {
    let mut record = record();
    let mental = record.section_mut(ExamSection::MentalStatus);
    mental.set_abnormal();
    mental.set_flag("depressed", true);
    mental.set_flag("circlingL", true);
    let lines = compose::exam(&record);
    assert!(
        lines.contains(&"**Mental Status**: Depressed, Circling L".to_string()),
        "got: {lines:?}",
    );
}

#[test]
fn flag_order_is_first_set_order_not_catalog_order() {
    let mut record = record();
    let mental = record.section_mut(ExamSection::MentalStatus);
    mental.set_abnormal();
    // circlingL sits after depressed in the catalog; set it first.
    mental.set_flag("circlingL", true);
    mental.set_flag("depressed", true);
    mental.set_flag("headPressing", true);
    let lines = compose::exam(&record);
    assert!(lines.contains(&"**Mental Status**: Circling L, Depressed, Head pressing".to_string()));
}

#[test]
fn stale_flags_on_a_normal_section_never_render() {
    let mut record = record();
    record.sections.insert(
        ExamSection::MentalStatus,
        SectionState {
            status: SectionStatus::Normal,
            data: FlagList::from_active(["comatose"]),
            note: String::new(),
        },
    );
    let lines = compose::exam(&record);
    assert!(lines.contains(&"**Mental Status**: Bright, alert, responsive".to_string()));
    assert!(!lines.iter().any(|l| l.contains("Comatose")));
}

#[test]
fn not_examined_sections_are_omitted() {
    let lines = compose::exam(&record());
    assert_eq!(lines, vec!["**Neurologic examination**".to_string()]);
}

#[test]
fn unknown_flag_ids_are_skipped() {
    let mut record = record();
    let gait = record.section_mut(ExamSection::Gait);
    gait.set_abnormal();
    gait.set_flag("jetpackMode", true);
    gait.set_flag("paraparesis", true);
    let lines = compose::exam(&record);
    assert!(lines.contains(&"**Gait & posture**: Gait: Paraparesis".to_string()));
}

#[test]
fn abnormal_with_no_recognized_flags_reads_unspecified() {
    let mut record = record();
    record.section_mut(ExamSection::Palpation).set_abnormal();
    let lines = compose::exam(&record);
    assert!(lines.contains(&"**Palpation**: Abnormal (unspecified)".to_string()));
}

#[test]
fn group_renders_only_its_abnormal_members() {
    let mut record = record();
    let posture = record.section_mut(ExamSection::Posture);
    posture.set_abnormal();
    posture.set_flag("kyphosis", true);
    record.section_mut(ExamSection::Gait).set_normal();
    let lines = compose::exam(&record);
    assert!(lines.contains(&"**Gait & posture**: Posture: Kyphosis".to_string()));
}

#[test]
fn group_without_abnormal_members_is_omitted_unless_all_normal() {
    let mut record = record();
    record.section_mut(ExamSection::Posture).set_normal();
    // Gait stays not-examined: the group neither collapses nor renders.
    let lines = compose::exam(&record);
    assert!(!lines.iter().any(|l| l.starts_with("**Gait & posture**")));
}

#[test]
fn notes_append_to_their_line() {
    let mut record = record();
    let palpation = record.section_mut(ExamSection::Palpation);
    palpation.set_abnormal();
    palpation.set_flag("cervicalPain", true);
    palpation.note = "resents neck flexion".to_string();
    let lines = compose::exam(&record);
    assert!(lines.contains(
        &"**Palpation**: Cervical pain  - Note: resents neck flexion".to_string()
    ));
}

#[test]
fn history_line_follows_the_heading() {
    let mut record = record();
    record.history = "Three-day history of reluctance to jump.".to_string();
    let lines = compose::exam(&record);
    assert_eq!(lines[0], "**Neurologic examination**");
    assert_eq!(lines[1], "**History**: Three-day history of reluctance to jump.");
}

#[test]
fn myelopathy_preset_renders_the_expected_summary() {
    let record = merge::apply_exam_preset(&record(), "t3_l3_myelopathy");
    let expected = "\
**Neurologic examination**
**Mental Status**: Bright, alert, responsive
**Gait & posture**: Posture: Kyphosis; Gait: Paraparesis, Proprioceptive ataxia
**Cranial nerves**: No cranial nerve deficits detected
**Postural reactions**: Reduced LH, Reduced RH
**Spinal reflexes**: Patellar exaggerated L, Patellar exaggerated R, Cutaneous trunci cutoff
**Palpation**: Thoracolumbar pain
**Nociception**: Nociception intact in all limbs";
    assert_eq!(render_exam(&record), expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let mut record = merge::apply_exam_preset(&record(), "vestibular_peripheral");
    record.history = "Acute onset head tilt.".to_string();
    assert_eq!(render_exam(&record), render_exam(&record));
}

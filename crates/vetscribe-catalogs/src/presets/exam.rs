//! Neurologic examination presets: canonical neurolocalizations.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vetscribe_core::models::exam::{ExamPatch, ExamSection, SectionPatch};
use vetscribe_core::models::flags::FlagList;
use vetscribe_core::models::section::SectionState;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamPreset {
    pub id: String,
    pub label: String,
    pub patch: ExamPatch,
}

fn normal(section: ExamSection) -> SectionPatch {
    SectionPatch {
        section,
        state: SectionState::normal(),
    }
}

fn abnormal(section: ExamSection, flags: &[&str]) -> SectionPatch {
    SectionPatch {
        section,
        state: SectionState::abnormal(FlagList::from_active(flags.iter().copied())),
    }
}

fn preset(id: &str, label: &str, sections: Vec<SectionPatch>) -> ExamPreset {
    ExamPreset {
        id: id.to_string(),
        label: label.to_string(),
        patch: ExamPatch {
            history: None,
            sections,
        },
    }
}

static PRESETS: LazyLock<Vec<ExamPreset>> = LazyLock::new(|| {
    vec![
        preset(
            "t3_l3_myelopathy",
            "T3-L3 myelopathy",
            vec![
                normal(ExamSection::MentalStatus),
                abnormal(ExamSection::Posture, &["kyphosis"]),
                abnormal(ExamSection::Gait, &["paraparesis", "ataxiaProprioceptive"]),
                normal(ExamSection::MenaceResponse),
                normal(ExamSection::PupilsPlr),
                normal(ExamSection::PalpebralReflex),
                normal(ExamSection::FacialSymmetry),
                normal(ExamSection::Nystagmus),
                normal(ExamSection::Strabismus),
                normal(ExamSection::GagSwallow),
                normal(ExamSection::Tongue),
                abnormal(ExamSection::PosturalReactions, &["reducedLH", "reducedRH"]),
                abnormal(
                    ExamSection::SpinalReflexes,
                    &[
                        "patellarExaggeratedL",
                        "patellarExaggeratedR",
                        "cutaneousTrunciAbsent",
                    ],
                ),
                abnormal(ExamSection::Palpation, &["thoracolumbarPain"]),
                normal(ExamSection::Nociception),
            ],
        ),
        preset(
            "vestibular_peripheral",
            "Peripheral vestibular syndrome",
            vec![
                normal(ExamSection::MentalStatus),
                abnormal(ExamSection::Posture, &["headTiltL"]),
                abnormal(ExamSection::Gait, &["ataxiaVestibular"]),
                normal(ExamSection::MenaceResponse),
                normal(ExamSection::PupilsPlr),
                normal(ExamSection::PalpebralReflex),
                normal(ExamSection::FacialSymmetry),
                abnormal(ExamSection::Nystagmus, &["horizontal", "fastPhaseR"]),
                abnormal(ExamSection::Strabismus, &["positional"]),
                normal(ExamSection::GagSwallow),
                normal(ExamSection::Tongue),
                normal(ExamSection::PosturalReactions),
                normal(ExamSection::SpinalReflexes),
                normal(ExamSection::Palpation),
                normal(ExamSection::Nociception),
            ],
        ),
        preset(
            "cerebellar",
            "Cerebellar syndrome",
            vec![
                normal(ExamSection::MentalStatus),
                abnormal(ExamSection::Posture, &["wideBasedStance"]),
                abnormal(ExamSection::Gait, &["ataxiaCerebellar", "hypermetria"]),
                abnormal(ExamSection::MenaceResponse, &["absentL", "absentR"]),
                normal(ExamSection::PupilsPlr),
                normal(ExamSection::PalpebralReflex),
                normal(ExamSection::FacialSymmetry),
                normal(ExamSection::Nystagmus),
                normal(ExamSection::Strabismus),
                normal(ExamSection::GagSwallow),
                normal(ExamSection::Tongue),
                normal(ExamSection::PosturalReactions),
                normal(ExamSection::SpinalReflexes),
                normal(ExamSection::Palpation),
                normal(ExamSection::Nociception),
            ],
        ),
        preset(
            "normal_exam",
            "Normal examination",
            ExamSection::ALL.iter().map(|s| normal(*s)).collect(),
        ),
    ]
});

pub fn all() -> &'static [ExamPreset] {
    &PRESETS
}

pub fn get(id: &str) -> Option<&'static ExamPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

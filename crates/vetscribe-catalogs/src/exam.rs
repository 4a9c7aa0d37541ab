//! Neurologic examination catalog: the fifteen sections, their flag
//! vocabularies, and the fixed summary layout.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vetscribe_core::models::exam::ExamSection;

use crate::defs::FlagDef;

/// Static definition of one exam section.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionDef {
    pub id: ExamSection,
    pub label: String,
    pub normal_phrase: String,
    pub flags: Vec<FlagDef>,
}

/// One entry of the fixed summary layout: a lone section, or a labeled group
/// that collapses to a single phrase when every member is Normal.
///
/// Only the two groups collapse; single sections never do.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SummaryEntry {
    Single {
        section: ExamSection,
    },
    Group {
        label: String,
        members: Vec<ExamSection>,
        all_normal_phrase: String,
    },
}

fn section(
    id: ExamSection,
    label: &str,
    normal_phrase: &str,
    flags: &[(&str, &str)],
) -> SectionDef {
    SectionDef {
        id,
        label: label.to_string(),
        normal_phrase: normal_phrase.to_string(),
        flags: flags
            .iter()
            .map(|(id, label)| FlagDef {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

static SECTIONS: LazyLock<Vec<SectionDef>> = LazyLock::new(|| {
    vec![
        section(
            ExamSection::MentalStatus,
            "Mental Status",
            "Bright, alert, responsive",
            &[
                ("depressed", "Depressed"),
                ("obtunded", "Obtunded"),
                ("stuporous", "Stuporous"),
                ("comatose", "Comatose"),
                ("disoriented", "Disoriented"),
                ("circlingL", "Circling L"),
                ("circlingR", "Circling R"),
                ("headPressing", "Head pressing"),
            ],
        ),
        section(
            ExamSection::Posture,
            "Posture",
            "Normal posture",
            &[
                ("headTiltL", "Head tilt L"),
                ("headTiltR", "Head tilt R"),
                ("headTurnL", "Head turn L"),
                ("headTurnR", "Head turn R"),
                ("wideBasedStance", "Wide-based stance"),
                ("kyphosis", "Kyphosis"),
                ("lowHeadCarriage", "Low head carriage"),
                ("decerebrate", "Decerebrate rigidity"),
                ("decerebellate", "Decerebellate posture"),
            ],
        ),
        section(
            ExamSection::Gait,
            "Gait",
            "Ambulatory, no ataxia or paresis",
            &[
                ("ataxiaProprioceptive", "Proprioceptive ataxia"),
                ("ataxiaVestibular", "Vestibular ataxia"),
                ("ataxiaCerebellar", "Cerebellar ataxia"),
                ("tetraparesis", "Tetraparesis"),
                ("paraparesis", "Paraparesis"),
                ("hemiparesisL", "Hemiparesis L"),
                ("hemiparesisR", "Hemiparesis R"),
                ("monoparesis", "Monoparesis"),
                ("nonAmbulatory", "Non-ambulatory"),
                ("hypermetria", "Hypermetria"),
                ("lameness", "Lameness"),
            ],
        ),
        section(
            ExamSection::MenaceResponse,
            "Menace response",
            "Present bilaterally",
            &[
                ("absentL", "Absent L"),
                ("absentR", "Absent R"),
                ("reducedL", "Reduced L"),
                ("reducedR", "Reduced R"),
            ],
        ),
        section(
            ExamSection::PupilsPlr,
            "Pupils & PLR",
            "Pupils symmetric, PLR intact OU",
            &[
                ("anisocoria", "Anisocoria"),
                ("mydriasisL", "Mydriasis L"),
                ("mydriasisR", "Mydriasis R"),
                ("miosisL", "Miosis L"),
                ("miosisR", "Miosis R"),
                ("plrAbsentL", "PLR absent L"),
                ("plrAbsentR", "PLR absent R"),
            ],
        ),
        section(
            ExamSection::PalpebralReflex,
            "Palpebral reflex",
            "Present bilaterally",
            &[
                ("absentL", "Absent L"),
                ("absentR", "Absent R"),
                ("reducedL", "Reduced L"),
                ("reducedR", "Reduced R"),
            ],
        ),
        section(
            ExamSection::FacialSymmetry,
            "Facial symmetry",
            "Face symmetric",
            &[
                ("paresisL", "Facial paresis L"),
                ("paresisR", "Facial paresis R"),
                ("spasmL", "Facial spasm L"),
                ("spasmR", "Facial spasm R"),
            ],
        ),
        section(
            ExamSection::Nystagmus,
            "Nystagmus",
            "No nystagmus observed",
            &[
                ("horizontal", "Horizontal"),
                ("vertical", "Vertical"),
                ("rotary", "Rotary"),
                ("positional", "Positional"),
                ("fastPhaseL", "Fast phase L"),
                ("fastPhaseR", "Fast phase R"),
            ],
        ),
        section(
            ExamSection::Strabismus,
            "Strabismus",
            "No strabismus",
            &[
                ("ventrolateralL", "Ventrolateral L"),
                ("ventrolateralR", "Ventrolateral R"),
                ("positional", "Positional"),
                ("convergent", "Convergent"),
            ],
        ),
        section(
            ExamSection::GagSwallow,
            "Gag & swallow",
            "Gag reflex intact",
            &[
                ("reduced", "Reduced gag"),
                ("absent", "Absent gag"),
                ("dysphagia", "Dysphagia"),
            ],
        ),
        section(
            ExamSection::Tongue,
            "Tongue",
            "Normal tone and movement",
            &[
                ("deviationL", "Deviation L"),
                ("deviationR", "Deviation R"),
                ("atrophy", "Atrophy"),
                ("weakness", "Weak tongue movements"),
            ],
        ),
        section(
            ExamSection::PosturalReactions,
            "Postural reactions",
            "Postural reactions intact in all limbs",
            &[
                ("reducedLF", "Reduced LF"),
                ("reducedRF", "Reduced RF"),
                ("reducedLH", "Reduced LH"),
                ("reducedRH", "Reduced RH"),
                ("absentLF", "Absent LF"),
                ("absentRF", "Absent RF"),
                ("absentLH", "Absent LH"),
                ("absentRH", "Absent RH"),
            ],
        ),
        section(
            ExamSection::SpinalReflexes,
            "Spinal reflexes",
            "Spinal reflexes intact and symmetric",
            &[
                ("patellarReducedL", "Patellar reduced L"),
                ("patellarReducedR", "Patellar reduced R"),
                ("patellarExaggeratedL", "Patellar exaggerated L"),
                ("patellarExaggeratedR", "Patellar exaggerated R"),
                ("withdrawalReducedLF", "Withdrawal reduced LF"),
                ("withdrawalReducedRF", "Withdrawal reduced RF"),
                ("withdrawalReducedLH", "Withdrawal reduced LH"),
                ("withdrawalReducedRH", "Withdrawal reduced RH"),
                ("cutaneousTrunciAbsent", "Cutaneous trunci cutoff"),
            ],
        ),
        section(
            ExamSection::Palpation,
            "Palpation",
            "No pain on spinal palpation",
            &[
                ("cervicalPain", "Cervical pain"),
                ("thoracolumbarPain", "Thoracolumbar pain"),
                ("lumbosacralPain", "Lumbosacral pain"),
                ("muscleAtrophy", "Muscle atrophy"),
            ],
        ),
        section(
            ExamSection::Nociception,
            "Nociception",
            "Nociception intact in all limbs",
            &[
                ("deepPainAbsentLH", "Deep pain absent LH"),
                ("deepPainAbsentRH", "Deep pain absent RH"),
                ("deepPainAbsentTail", "Deep pain absent tail"),
                ("superficialReduced", "Superficial pain reduced"),
            ],
        ),
    ]
});

static SUMMARY_LAYOUT: LazyLock<Vec<SummaryEntry>> = LazyLock::new(|| {
    vec![
        SummaryEntry::Single {
            section: ExamSection::MentalStatus,
        },
        SummaryEntry::Group {
            label: "Gait & posture".to_string(),
            members: vec![ExamSection::Posture, ExamSection::Gait],
            all_normal_phrase: "Ambulatory with normal posture, no ataxia or paresis".to_string(),
        },
        SummaryEntry::Group {
            label: "Cranial nerves".to_string(),
            members: vec![
                ExamSection::MenaceResponse,
                ExamSection::PupilsPlr,
                ExamSection::PalpebralReflex,
                ExamSection::FacialSymmetry,
                ExamSection::Nystagmus,
                ExamSection::Strabismus,
                ExamSection::GagSwallow,
                ExamSection::Tongue,
            ],
            all_normal_phrase: "No cranial nerve deficits detected".to_string(),
        },
        SummaryEntry::Single {
            section: ExamSection::PosturalReactions,
        },
        SummaryEntry::Single {
            section: ExamSection::SpinalReflexes,
        },
        SummaryEntry::Single {
            section: ExamSection::Palpation,
        },
        SummaryEntry::Single {
            section: ExamSection::Nociception,
        },
    ]
});

pub fn sections() -> &'static [SectionDef] {
    &SECTIONS
}

/// Definition for a section. Total: every `ExamSection` has an entry, in
/// enum order.
pub fn section_def(section: ExamSection) -> &'static SectionDef {
    &SECTIONS[section as usize]
}

/// Display label for a flag, or `None` when the id is not in this section's
/// catalog. Stale or foreign flag ids resolve to `None` and are skipped by
/// the composer.
pub fn flag_label(section: ExamSection, flag_id: &str) -> Option<&'static str> {
    section_def(section)
        .flags
        .iter()
        .find(|f| f.id == flag_id)
        .map(|f| f.label.as_str())
}

/// The fixed order in which the exam summary is composed.
pub fn summary_layout() -> &'static [SummaryEntry] {
    &SUMMARY_LAYOUT
}

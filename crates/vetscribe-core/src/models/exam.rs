use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::section::SectionState;
use crate::models::signalment::Signalment;

/// The fifteen neurologic examination sections, in examination order.
///
/// The enum order is the canonical documentation order; the summary layout
/// in the exam catalog walks these in fixed positions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExamSection {
    MentalStatus,
    Posture,
    Gait,
    MenaceResponse,
    PupilsPlr,
    PalpebralReflex,
    FacialSymmetry,
    Nystagmus,
    Strabismus,
    GagSwallow,
    Tongue,
    PosturalReactions,
    SpinalReflexes,
    Palpation,
    Nociception,
}

impl ExamSection {
    pub const ALL: [ExamSection; 15] = [
        ExamSection::MentalStatus,
        ExamSection::Posture,
        ExamSection::Gait,
        ExamSection::MenaceResponse,
        ExamSection::PupilsPlr,
        ExamSection::PalpebralReflex,
        ExamSection::FacialSymmetry,
        ExamSection::Nystagmus,
        ExamSection::Strabismus,
        ExamSection::GagSwallow,
        ExamSection::Tongue,
        ExamSection::PosturalReactions,
        ExamSection::SpinalReflexes,
        ExamSection::Palpation,
        ExamSection::Nociception,
    ];
}

/// A neurologic examination record.
///
/// Sections absent from the map are equivalent to the default state
/// (status None, not examined).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamRecord {
    pub id: Uuid,
    pub signalment: Signalment,
    pub exam_date: jiff::civil::Date,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub sections: BTreeMap<ExamSection, SectionState>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl ExamRecord {
    pub fn new(signalment: Signalment, exam_date: jiff::civil::Date) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            signalment,
            exam_date,
            history: String::new(),
            sections: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Mutable access to a section's state, materializing the default
    /// (not examined) state on first touch.
    pub fn section_mut(&mut self, section: ExamSection) -> &mut SectionState {
        self.sections.entry(section).or_default()
    }
}

/// One section's replacement state inside a patch.
///
/// Status and flags land together as a unit; a patch can never set flags
/// without also saying what status they belong to.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionPatch {
    pub section: ExamSection,
    pub state: SectionState,
}

/// A partial update to an `ExamRecord`.
///
/// Carries no identity fields: applying a patch can change findings and
/// history but never who the patient is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExamPatch {
    #[serde(default)]
    pub history: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionPatch>,
}

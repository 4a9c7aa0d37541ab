use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::signalment::Signalment;

/// Study-level header fields of an MRI report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StudyInfo {
    pub study_description: String,
    #[serde(default)]
    pub clinical_history: String,
}

impl Default for StudyInfo {
    fn default() -> Self {
        Self {
            study_description: "MRI brain (3T): sagittal/transverse/dorsal T2, FLAIR, T2*, \
                                DWI/ADC, T1 pre- and post-contrast"
                .to_string(),
            clinical_history: String::new(),
        }
    }
}

/// Per-sequence stroke protocol selections.
///
/// Every value is one of the exact option strings from the stroke catalog;
/// `lesion_size` is free text. The composer branches on these values by
/// substring and equality tests, so the strings are the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrokeFields {
    pub dwi: String,
    pub adc: String,
    pub flair: String,
    pub t2star: String,
    pub contrast: String,
    pub mass_effect: String,
    pub heme_pattern: String,
    pub vessel: String,
    pub perfusion: String,
    pub territory: String,
    #[serde(default)]
    pub lesion_size: String,
    pub impression_preset: String,
}

impl Default for StrokeFields {
    /// The classic acute-infarct presentation, the starting point a stroke
    /// study is customized from.
    fn default() -> Self {
        Self {
            dwi: "Marked hyperintense".to_string(),
            adc: "Low signal (restricted diffusion)".to_string(),
            flair: "Hyperintense".to_string(),
            t2star: "No susceptibility".to_string(),
            contrast: "No enhancement".to_string(),
            mass_effect: "Mild".to_string(),
            heme_pattern: "None observed".to_string(),
            vessel: "Normal flow voids".to_string(),
            perfusion: "Not acquired".to_string(),
            territory: "Right MCA territory".to_string(),
            lesion_size: String::new(),
            impression_preset: "Acute non-hemorrhagic ischemic infarct".to_string(),
        }
    }
}

/// An MRI report customization record.
///
/// At most one condition is selected at a time; `active_variants` lists
/// variant ids of that condition. Variant ids belonging to some other
/// condition are ignored by composition, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MriRecord {
    pub id: Uuid,
    pub signalment: Signalment,
    #[serde(default)]
    pub study: StudyInfo,
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub active_variants: Vec<String>,
    #[serde(default)]
    pub stroke: StrokeFields,
    #[serde(default)]
    pub additional_findings: String,
    #[serde(default)]
    pub differential: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl MriRecord {
    pub fn new(signalment: Signalment) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            signalment,
            study: StudyInfo::default(),
            condition_id: None,
            active_variants: Vec::new(),
            stroke: StrokeFields::default(),
            additional_findings: String::new(),
            differential: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to an `MriRecord`. No identity fields; `stroke` and
/// `study` replace wholesale when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MriPatch {
    #[serde(default)]
    pub study: Option<StudyInfo>,
    #[serde(default)]
    pub condition_id: Option<String>,
    #[serde(default)]
    pub active_variants: Option<Vec<String>>,
    #[serde(default)]
    pub stroke: Option<StrokeFields>,
    #[serde(default)]
    pub additional_findings: Option<String>,
    #[serde(default)]
    pub differential: Option<String>,
}

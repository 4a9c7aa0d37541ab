//! MRI report presets: condition selections with protocol fields where the
//! condition uses them.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vetscribe_core::models::mri::{MriPatch, StrokeFields};

use crate::conditions::STROKE_CONDITION_ID;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MriPreset {
    pub id: String,
    pub label: String,
    pub patch: MriPatch,
}

fn condition(id: &str, label: &str, condition_id: &str, stroke: Option<StrokeFields>) -> MriPreset {
    MriPreset {
        id: id.to_string(),
        label: label.to_string(),
        patch: MriPatch {
            study: None,
            condition_id: Some(condition_id.to_string()),
            // Variant state from a previous condition never carries over.
            active_variants: Some(Vec::new()),
            stroke,
            additional_findings: None,
            differential: None,
        },
    }
}

static PRESETS: LazyLock<Vec<MriPreset>> = LazyLock::new(|| {
    vec![
        condition(
            "meningioma",
            "Intracranial meningioma",
            "meningioma",
            None,
        ),
        condition("ivdd", "Intervertebral disc extrusion", "ivdd", None),
        condition(
            "acute_stroke",
            "Acute ischemic infarct",
            STROKE_CONDITION_ID,
            Some(StrokeFields::default()),
        ),
        condition(
            "gme_mue",
            "Meningoencephalitis of unknown etiology",
            "gme",
            None,
        ),
        condition(
            "hemorrhagic_stroke",
            "Hemorrhagic infarct",
            STROKE_CONDITION_ID,
            Some(StrokeFields {
                t2star: "Confluent susceptibility".to_string(),
                heme_pattern: "Confluent hematoma".to_string(),
                impression_preset: "Hemorrhagic infarct".to_string(),
                ..StrokeFields::default()
            }),
        ),
    ]
});

pub fn all() -> &'static [MriPreset] {
    &PRESETS
}

pub fn get(id: &str) -> Option<&'static MriPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

//! Stroke protocol catalog: the per-sequence select fields and their
//! ordered option strings.
//!
//! The composer branches on these exact strings, so they are part of the
//! narrative contract and must not be reworded casually.

use std::sync::LazyLock;

use crate::defs::SelectDef;

fn select(id: &str, label: &str, options: &[&str]) -> SelectDef {
    SelectDef {
        id: id.to_string(),
        label: label.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

static FIELDS: LazyLock<Vec<SelectDef>> = LazyLock::new(|| {
    vec![
        select(
            "dwi",
            "DWI",
            &[
                "Marked hyperintense",
                "Mildly hyperintense",
                "Isointense",
                "Not acquired",
            ],
        ),
        select(
            "adc",
            "ADC map",
            &[
                "Low signal (restricted diffusion)",
                "Near-normal (pseudonormalizing)",
                "High signal (facilitated diffusion)",
                "Not acquired",
            ],
        ),
        select(
            "flair",
            "FLAIR",
            &[
                "Hyperintense",
                "Isointense",
                "Subtle hyperintensity",
                "Not acquired",
            ],
        ),
        select(
            "t2star",
            "T2* susceptibility",
            &[
                "No susceptibility",
                "Punctate susceptibility foci",
                "Confluent susceptibility",
                "Not acquired",
            ],
        ),
        select(
            "contrast",
            "Post-contrast",
            &[
                "No enhancement",
                "Mild patchy enhancement",
                "Marked enhancement",
                "Not administered",
            ],
        ),
        select("mass_effect", "Mass effect", &["None", "Mild", "Moderate", "Severe"]),
        select(
            "heme_pattern",
            "Hemorrhage pattern",
            &["None observed", "Petechial", "Confluent hematoma"],
        ),
        select(
            "vessel",
            "Vascular assessment",
            &[
                "Normal flow voids",
                "Attenuated MCA flow void",
                "Absent basilar flow void",
                "Not assessed",
            ],
        ),
        select(
            "perfusion",
            "Perfusion",
            &[
                "Not acquired",
                "Perfusion deficit present",
                "No perfusion deficit",
            ],
        ),
        select(
            "territory",
            "Vascular territory",
            &[
                "Right MCA territory",
                "Left MCA territory",
                "Cerebellar (rostral cerebellar artery)",
                "Thalamic (perforating branch)",
                "Multifocal",
            ],
        ),
        select("lesion_size", "Lesion size", &[]),
        select(
            "impression_preset",
            "Impression",
            &[
                "Acute non-hemorrhagic ischemic infarct",
                "Subacute ischemic infarct",
                "Hemorrhagic infarct",
                "Intraparenchymal hemorrhage",
                "Chronic infarct with malacia",
                "No acute intracranial lesion",
            ],
        ),
    ]
});

pub fn fields() -> &'static [SelectDef] {
    &FIELDS
}

pub fn field_def(id: &str) -> Option<&'static SelectDef> {
    FIELDS.iter().find(|f| f.id == id)
}

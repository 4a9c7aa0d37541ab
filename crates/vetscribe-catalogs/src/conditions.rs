//! MRI condition library.
//!
//! Each entry is the static template text for one imaging diagnosis. The
//! composer turns an entry into FINDINGS / IMPRESSION / RECOMMENDATIONS
//! clauses; variants override parts of the base entry (primary findings
//! replace outright, secondary findings and signal characteristics append).
//!
//! The `ischemic_infarct` entry is special: its narrative is composed from
//! the record's stroke protocol fields rather than from static text, and
//! only its recommendations and metadata are read from here.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The condition whose narrative comes from `StrokeFields`, not from the
/// entry's static template text.
pub const STROKE_CONDITION_ID: &str = "ischemic_infarct";

/// One sequence's expected signal for a condition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignalCharacteristic {
    pub sequence: String,
    pub intensity: String,
    pub pattern: Option<String>,
}

/// A named variant of a condition entry.
///
/// `primary_findings`, when present, replaces the entry's primary findings
/// outright; `secondary_findings` and `signal_characteristics` are appended
/// after the entry's own.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    pub id: String,
    pub label: String,
    pub primary_findings: Option<Vec<String>>,
    pub secondary_findings: Vec<String>,
    pub signal_characteristics: Vec<SignalCharacteristic>,
}

/// Static template text for one imaging diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionEntry {
    pub id: String,
    pub display_name: String,
    pub location: Vec<String>,
    pub primary_findings: Vec<String>,
    pub signal_characteristics: Vec<SignalCharacteristic>,
    pub secondary_findings: Vec<String>,
    pub enhancement: Option<String>,
    pub mass_effect: Option<String>,
    pub differentials: Vec<String>,
    pub clinical_notes: Option<String>,
    pub recommendations: Vec<String>,
    pub variants: Vec<Variant>,
}

impl ConditionEntry {
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.id == id)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sig(sequence: &str, intensity: &str, pattern: Option<&str>) -> SignalCharacteristic {
    SignalCharacteristic {
        sequence: sequence.to_string(),
        intensity: intensity.to_string(),
        pattern: pattern.map(|p| p.to_string()),
    }
}

fn variant(
    id: &str,
    label: &str,
    primary: Option<&[&str]>,
    secondary: &[&str],
    signal: Vec<SignalCharacteristic>,
) -> Variant {
    Variant {
        id: id.to_string(),
        label: label.to_string(),
        primary_findings: primary.map(strings),
        secondary_findings: strings(secondary),
        signal_characteristics: signal,
    }
}

static LIBRARY: LazyLock<Vec<ConditionEntry>> = LazyLock::new(|| {
    vec![
        ConditionEntry {
            id: "meningioma".to_string(),
            display_name: "Intracranial meningioma".to_string(),
            location: strings(&["right rostrotentorial convexity", "extra-axial compartment"]),
            primary_findings: strings(&[
                "Well-circumscribed, broad-based mass with a clear dural interface",
                "A dural tail extends along the adjacent meninges",
            ]),
            signal_characteristics: vec![
                sig(
                    "T2",
                    "iso- to mildly hyperintense",
                    Some("heterogeneous if cystic or mineralized"),
                ),
                sig("FLAIR", "hyperintense", None),
                sig("T1", "isointense to grey matter", None),
                sig("T2*", "no susceptibility", Some("occasional mineralization")),
            ],
            secondary_findings: strings(&[
                "Moderate perilesional vasogenic edema in the adjacent white matter",
                "Hyperostosis of the overlying calvarium",
            ]),
            enhancement: Some(
                "Strong, uniform contrast enhancement with an enhancing dural tail".to_string(),
            ),
            mass_effect: Some(
                "Mass effect on the adjacent parenchyma with midline shift proportional to lesion size"
                    .to_string(),
            ),
            differentials: strings(&["histiocytic sarcoma", "granular cell tumor", "metastasis"]),
            clinical_notes: Some(
                "Most common primary brain tumor of older dogs and cats; cats may have multiple masses."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Surgical planning CT if resection is considered",
                "Corticosteroid therapy for peritumoral edema",
                "Recheck MRI in 3 months if managed conservatively",
            ]),
            variants: vec![
                variant(
                    "cystic",
                    "cystic",
                    Some(&[
                        "Well-circumscribed extra-axial mass with a large non-enhancing cystic component",
                        "The solid component maintains a broad dural base",
                    ]),
                    &["The cystic component follows fluid signal on all sequences"],
                    vec![sig("T1", "cyst fluid isointense to CSF", None)],
                ),
                variant(
                    "en_plaque",
                    "en plaque",
                    Some(&[
                        "Plaque-like meningeal thickening following the calvarial contour without a discrete mass",
                    ]),
                    &["Diffuse pachymeningeal enhancement along the affected convexity"],
                    vec![],
                ),
            ],
        },
        ConditionEntry {
            id: "glioma".to_string(),
            display_name: "Glioma".to_string(),
            location: strings(&["intra-axial white matter of the piriform and temporal lobes"]),
            primary_findings: strings(&[
                "Intra-axial mass with indistinct margins",
                "No dural contact or tail",
            ]),
            signal_characteristics: vec![
                sig("T2", "hyperintense", Some("heterogeneous")),
                sig("FLAIR", "hyperintense", Some("peripheral rim")),
                sig("T1", "hypointense", None),
            ],
            secondary_findings: strings(&[
                "Mild perilesional edema",
                "Cyst-like intratumoral regions",
            ]),
            enhancement: Some("Variable contrast enhancement, commonly ring-shaped".to_string()),
            mass_effect: Some(
                "Regional mass effect with compression of the lateral ventricle".to_string(),
            ),
            differentials: strings(&[
                "cerebrovascular accident",
                "meningoencephalitis of unknown etiology",
                "metastasis",
            ]),
            clinical_notes: Some(
                "Predilection for brachycephalic breeds; oligodendrogliomas favor periventricular locations."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Neurology consultation for biopsy versus radiation therapy",
                "Anticonvulsant cover if seizures are reported",
                "Recheck MRI in 6-8 weeks if treated medically",
            ]),
            variants: vec![variant(
                "high_grade",
                "high-grade features",
                Some(&[
                    "Intra-axial mass with irregular, infiltrative margins crossing white matter boundaries",
                ]),
                &[
                    "Marked perilesional edema with midline shift",
                    "Foci of intratumoral necrosis",
                ],
                vec![sig("T2*", "susceptibility foci", Some("intratumoral hemorrhage"))],
            )],
        },
        ConditionEntry {
            id: STROKE_CONDITION_ID.to_string(),
            display_name: "Ischemic infarct".to_string(),
            location: vec![],
            primary_findings: vec![],
            signal_characteristics: vec![],
            secondary_findings: vec![],
            enhancement: None,
            mass_effect: None,
            differentials: strings(&[
                "hypertensive encephalopathy",
                "neoplasia",
                "meningoencephalitis",
            ]),
            clinical_notes: Some(
                "Greyhounds and Cavalier King Charles spaniels are over-represented; search for underlying hypertension, cardiac, renal, or endocrine disease."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Blood pressure measurement and urine protein:creatinine ratio",
                "Echocardiography and thyroid testing to screen for predisposing disease",
                "Recheck MRI in 4-6 weeks if signs progress",
            ]),
            variants: vec![],
        },
        ConditionEntry {
            id: "ivdd".to_string(),
            display_name: "Intervertebral disc extrusion".to_string(),
            location: strings(&["T12-13 intervertebral disc space", "ventral extradural compartment"]),
            primary_findings: strings(&[
                "Extruded disc material causing extradural spinal cord compression",
                "Loss of the hyperintense nucleus pulposus signal at the affected disc space",
            ]),
            signal_characteristics: vec![
                sig("T2", "hypointense extruded material", Some("dispersed dorsolaterally")),
                sig("T1", "isointense to disc", None),
                sig(
                    "T2*",
                    "no susceptibility",
                    Some("acute hemorrhage possible with explosive extrusions"),
                ),
            ],
            secondary_findings: strings(&[
                "Spinal cord swelling with intramedullary T2 hyperintensity over the compression site",
                "Narrowing of the affected intervertebral disc space",
            ]),
            enhancement: None,
            mass_effect: Some(
                "Extradural compression displacing the spinal cord dorsally".to_string(),
            ),
            differentials: strings(&[
                "fibrocartilaginous embolism",
                "acute non-compressive nucleus pulposus extrusion",
                "spinal neoplasia",
            ]),
            clinical_notes: Some(
                "Chondrodystrophic breeds are predisposed; the T3-L3 segment is most commonly affected."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Surgical decompression if non-ambulatory or deep pain is absent",
                "Strict cage rest for 4 weeks if ambulatory with pain only",
                "Serial neurologic examinations every 12 hours while hospitalized",
            ]),
            variants: vec![variant(
                "hansen_type_ii",
                "Hansen type II protrusion",
                Some(&["Broad-based annular protrusion with dorsal bulging of the intact annulus"]),
                &["Chronic spinal cord atrophy at the level of the protrusion"],
                vec![],
            )],
        },
        ConditionEntry {
            id: "otitis_media_interna".to_string(),
            display_name: "Otitis media/interna".to_string(),
            location: strings(&["right tympanic bulla", "petrous temporal bone"]),
            primary_findings: strings(&[
                "Material filling the tympanic bulla",
                "Thickening of the bulla wall",
            ]),
            signal_characteristics: vec![
                sig("T2", "hyperintense", None),
                sig("T1", "iso- to hyperintense", Some("proteinaceous content")),
                sig("FLAIR", "incomplete suppression", None),
            ],
            secondary_findings: strings(&[
                "Loss of the normal T2 signal of the labyrinthine fluid on the affected side",
                "Regional lymphadenopathy",
            ]),
            enhancement: Some(
                "Peripheral rim enhancement of the bulla lining, with meningeal enhancement along the cerebellopontine angle in intracranial extension"
                    .to_string(),
            ),
            mass_effect: None,
            differentials: strings(&[
                "cholesteatoma",
                "nasopharyngeal polyp",
                "neoplasia of the bulla",
            ]),
            clinical_notes: Some(
                "Correlate with otoscopic findings; peripheral vestibular signs, Horner syndrome, and facial nerve deficits are common."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Myringotomy with culture and cytology",
                "Systemic antibiotic therapy for 6-8 weeks guided by culture",
                "Recheck imaging if signs persist or recur",
            ]),
            variants: vec![variant(
                "polyp",
                "nasopharyngeal polyp",
                Some(&[
                    "Soft tissue mass extending from the tympanic bulla through the auditory tube into the nasopharynx",
                ]),
                &["Expansion of the bulla without lysis"],
                vec![],
            )],
        },
        ConditionEntry {
            id: "gme".to_string(),
            display_name: "Meningoencephalitis of unknown etiology (GME pattern)".to_string(),
            location: strings(&["multifocal white matter of the cerebrum and brainstem"]),
            primary_findings: strings(&[
                "Multifocal, ill-defined intra-axial lesions",
                "Lesions are asymmetric and predominantly affect white matter",
            ]),
            signal_characteristics: vec![
                sig("T2", "hyperintense", None),
                sig("FLAIR", "hyperintense", None),
                sig("T1", "iso- to hypointense", None),
            ],
            secondary_findings: strings(&[
                "Mild perilesional edema",
                "Meningeal involvement in the focal form",
            ]),
            enhancement: Some(
                "Patchy to ring enhancement of the larger lesions, with possible meningeal enhancement"
                    .to_string(),
            ),
            mass_effect: Some("Mass effect only where lesions become confluent".to_string()),
            differentials: strings(&[
                "necrotizing meningoencephalitis",
                "infectious meningoencephalitis",
                "CNS lymphoma",
            ]),
            clinical_notes: Some(
                "Young to middle-aged toy and terrier breeds are over-represented; CSF analysis is supportive."
                    .to_string(),
            ),
            recommendations: strings(&[
                "CSF analysis with infectious disease PCR panel",
                "Immunosuppressive therapy pending exclusion of infectious disease",
                "Recheck MRI in 6-8 weeks to assess response",
            ]),
            variants: vec![variant(
                "focal",
                "focal form",
                Some(&[
                    "Solitary ill-defined intra-axial mass lesion of the cerebral white matter or brainstem",
                ]),
                &[
                    "Imaging may be indistinguishable from glioma; signalment and CSF findings aid differentiation",
                ],
                vec![],
            )],
        },
        ConditionEntry {
            id: "hydrocephalus".to_string(),
            display_name: "Congenital hydrocephalus".to_string(),
            location: strings(&["lateral ventricles, bilaterally symmetric"]),
            primary_findings: strings(&[
                "Marked symmetric dilation of the lateral ventricles",
                "Thinning of the overlying cerebral cortex",
            ]),
            signal_characteristics: vec![
                sig("T2", "CSF signal throughout the dilated ventricular system", None),
                sig(
                    "FLAIR",
                    "suppressing",
                    Some("periventricular rim of incomplete suppression with transependymal edema"),
                ),
            ],
            secondary_findings: strings(&[
                "Dorsal deviation of the corpus callosum",
                "An open fontanelle may be present",
            ]),
            enhancement: Some("No abnormal contrast enhancement".to_string()),
            mass_effect: None,
            differentials: strings(&[
                "ex vacuo ventricular dilation",
                "obstructive hydrocephalus secondary to a mass lesion",
            ]),
            clinical_notes: Some(
                "Toy and brachycephalic breeds; ventriculomegaly without clinical signs may be incidental."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Medical trial with omeprazole and corticosteroids",
                "Ventriculoperitoneal shunt consultation if refractory",
            ]),
            variants: vec![],
        },
        ConditionEntry {
            id: "pituitary_macroadenoma".to_string(),
            display_name: "Pituitary macroadenoma".to_string(),
            location: strings(&["pituitary fossa, extending dorsally into the suprasellar region"]),
            primary_findings: strings(&[
                "Well-defined sellar mass extending dorsally above the pituitary fossa",
                "Pituitary height-to-brain area ratio consistent with a macroadenoma",
            ]),
            signal_characteristics: vec![
                sig("T2", "iso- to hyperintense", Some("cystic or hemorrhagic foci possible")),
                sig("T1", "isointense", None),
            ],
            secondary_findings: strings(&[
                "Compression of the overlying hypothalamus and third ventricle",
                "Loss of the normal pituitary flush on dynamic study",
            ]),
            enhancement: Some("Strong, mildly heterogeneous contrast enhancement".to_string()),
            mass_effect: Some("Dorsal displacement of the third ventricle".to_string()),
            differentials: strings(&[
                "pituitary carcinoma",
                "craniopharyngioma",
                "suprasellar germ cell tumor",
            ]),
            clinical_notes: Some(
                "Correlate with endocrine testing; common in dogs with pituitary-dependent hyperadrenocorticism."
                    .to_string(),
            ),
            recommendations: strings(&[
                "Endocrine confirmation with eACTH and LDDST",
                "Radiation therapy consultation",
                "Recheck MRI 3 months after completing radiation",
            ]),
            variants: vec![variant(
                "apoplexy",
                "apoplexy",
                Some(&[
                    "Sellar mass expanded by acute intratumoral hemorrhage with a fluid-fluid level",
                ]),
                &["Peracute deterioration is typical with pituitary apoplexy"],
                vec![sig("T2*", "marked susceptibility", None)],
            )],
        },
    ]
});

pub fn all() -> &'static [ConditionEntry] {
    &LIBRARY
}

pub fn get(id: &str) -> Option<&'static ConditionEntry> {
    LIBRARY.iter().find(|c| c.id == id)
}

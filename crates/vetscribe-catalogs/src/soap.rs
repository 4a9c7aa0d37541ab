//! SOAP note catalog: body systems with their flag vocabularies, and the
//! subjective single-select options.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use vetscribe_core::models::soap::BodySystem;

use crate::defs::FlagDef;

/// Static definition of one body system.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemDef {
    pub id: BodySystem,
    pub label: String,
    pub normal_phrase: String,
    pub flags: Vec<FlagDef>,
}

pub const ATTITUDE_OPTIONS: [&str; 4] = ["BAR", "QAR", "Lethargic", "Obtunded"];
pub const APPETITE_OPTIONS: [&str; 4] = ["Normal", "Reduced", "Absent", "Increased"];
pub const HYDRATION_OPTIONS: [&str; 4] = [
    "Euhydrated",
    "~5% dehydrated",
    "~8% dehydrated",
    ">10% dehydrated",
];

/// Every body system shares the same canned normal phrase.
pub const SYSTEM_NORMAL_PHRASE: &str = "No significant findings";

fn system(id: BodySystem, label: &str, flags: &[(&str, &str)]) -> SystemDef {
    SystemDef {
        id,
        label: label.to_string(),
        normal_phrase: SYSTEM_NORMAL_PHRASE.to_string(),
        flags: flags
            .iter()
            .map(|(id, label)| FlagDef {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

static SYSTEMS: LazyLock<Vec<SystemDef>> = LazyLock::new(|| {
    vec![
        system(
            BodySystem::Integument,
            "Integument",
            &[
                ("alopecia", "Alopecia"),
                ("pruritus", "Pruritus"),
                ("pyoderma", "Pyoderma lesions"),
                ("masses", "Cutaneous masses"),
                ("ectoparasites", "Ectoparasites seen"),
            ],
        ),
        system(
            BodySystem::Eyes,
            "Eyes",
            &[
                ("ocularDischarge", "Ocular discharge"),
                ("conjunctivitis", "Conjunctivitis"),
                ("cornealUlcer", "Corneal ulcer"),
                ("cataracts", "Cataracts"),
                ("nuclearSclerosis", "Nuclear sclerosis"),
            ],
        ),
        system(
            BodySystem::Ears,
            "Ears",
            &[
                ("otitisExterna", "Otitis externa"),
                ("auralDischarge", "Aural discharge"),
                ("painOnPalpation", "Pain on ear palpation"),
                ("auralHematoma", "Aural hematoma"),
            ],
        ),
        system(
            BodySystem::Oral,
            "Oral cavity",
            &[
                ("dentalTartar", "Dental tartar"),
                ("gingivitis", "Gingivitis"),
                ("fracturedTooth", "Fractured tooth"),
                ("oralMass", "Oral mass"),
                ("ptyalism", "Ptyalism"),
            ],
        ),
        system(
            BodySystem::Cardiovascular,
            "Cardiovascular",
            &[
                ("murmur", "Heart murmur"),
                ("arrhythmia", "Arrhythmia"),
                ("pulseDeficits", "Pulse deficits"),
                ("muffledSounds", "Muffled heart sounds"),
            ],
        ),
        system(
            BodySystem::Respiratory,
            "Respiratory",
            &[
                ("increasedEffort", "Increased respiratory effort"),
                ("crackles", "Crackles on auscultation"),
                ("wheezes", "Wheezes"),
                ("nasalDischarge", "Nasal discharge"),
                ("cough", "Cough elicited"),
            ],
        ),
        system(
            BodySystem::Gastrointestinal,
            "Gastrointestinal",
            &[
                ("abdominalPain", "Abdominal pain"),
                ("organomegaly", "Organomegaly"),
                ("thickenedLoops", "Thickened intestinal loops"),
                ("diarrheaNoted", "Diarrhea noted"),
                ("vomitingReported", "Vomiting reported"),
            ],
        ),
        system(
            BodySystem::Urogenital,
            "Urogenital",
            &[
                ("bladderDistended", "Distended bladder"),
                ("bladderPain", "Pain on bladder palpation"),
                ("renomegaly", "Renomegaly"),
                ("vulvarDischarge", "Vulvar discharge"),
                ("prostatomegaly", "Prostatomegaly"),
            ],
        ),
        system(
            BodySystem::Musculoskeletal,
            "Musculoskeletal",
            &[
                ("lameness", "Lameness"),
                ("spinalPain", "Spinal pain on palpation"),
                ("jointEffusion", "Joint effusion"),
                ("muscleAtrophy", "Muscle atrophy"),
                ("crepitus", "Joint crepitus"),
            ],
        ),
        system(
            BodySystem::Neurologic,
            "Neurologic",
            &[
                ("ataxia", "Ataxia"),
                ("paresis", "Paresis"),
                ("crossedExtensor", "Crossed extensor reflex"),
                ("headTilt", "Head tilt"),
                ("seizureActivity", "Recent seizure activity"),
            ],
        ),
    ]
});

pub fn systems() -> &'static [SystemDef] {
    &SYSTEMS
}

/// Definition for a body system. Total: every `BodySystem` has an entry, in
/// enum order.
pub fn system_def(system: BodySystem) -> &'static SystemDef {
    &SYSTEMS[system as usize]
}

/// Display label for a flag, or `None` when the id is not in this system's
/// catalog.
pub fn flag_label(system: BodySystem, flag_id: &str) -> Option<&'static str> {
    system_def(system)
        .flags
        .iter()
        .find(|f| f.id == flag_id)
        .map(|f| f.label.as_str())
}

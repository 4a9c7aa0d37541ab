use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::section::SectionState;
use crate::models::signalment::Signalment;

/// The ten body systems of the physical examination, in documentation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BodySystem {
    Integument,
    Eyes,
    Ears,
    Oral,
    Cardiovascular,
    Respiratory,
    Gastrointestinal,
    Urogenital,
    Musculoskeletal,
    Neurologic,
}

impl BodySystem {
    pub const ALL: [BodySystem; 10] = [
        BodySystem::Integument,
        BodySystem::Eyes,
        BodySystem::Ears,
        BodySystem::Oral,
        BodySystem::Cardiovascular,
        BodySystem::Respiratory,
        BodySystem::Gastrointestinal,
        BodySystem::Urogenital,
        BodySystem::Musculoskeletal,
        BodySystem::Neurologic,
    ];
}

/// Vital signs as entered. Values stay strings; empty or unparseable
/// entries render as absent rather than being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Vitals {
    #[serde(default)]
    pub temp_f: String,
    #[serde(default)]
    pub pulse: String,
    #[serde(default)]
    pub resp: String,
    #[serde(default)]
    pub weight_kg: String,
    #[serde(default)]
    pub bcs: String,
}

/// A SOAP note record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapRecord {
    pub id: Uuid,
    pub signalment: Signalment,
    pub visit_date: jiff::civil::Date,
    #[serde(default)]
    pub attitude: String,
    #[serde(default)]
    pub appetite: String,
    #[serde(default)]
    pub hydration: String,
    #[serde(default)]
    pub vitals: Vitals,
    #[serde(default)]
    pub systems: BTreeMap<BodySystem, SectionState>,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub plan: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl SoapRecord {
    pub fn new(signalment: Signalment, visit_date: jiff::civil::Date) -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            signalment,
            visit_date,
            attitude: String::new(),
            appetite: String::new(),
            hydration: String::new(),
            vitals: Vitals::default(),
            systems: BTreeMap::new(),
            assessment: String::new(),
            plan: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn system_mut(&mut self, system: BodySystem) -> &mut SectionState {
        self.systems.entry(system).or_default()
    }
}

/// One body system's replacement state inside a patch.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SystemPatch {
    pub system: BodySystem,
    pub state: SectionState,
}

/// A partial update to a `SoapRecord`. No identity fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapPatch {
    #[serde(default)]
    pub attitude: Option<String>,
    #[serde(default)]
    pub appetite: Option<String>,
    #[serde(default)]
    pub hydration: Option<String>,
    #[serde(default)]
    pub vitals: Option<Vitals>,
    #[serde(default)]
    pub systems: Vec<SystemPatch>,
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
}

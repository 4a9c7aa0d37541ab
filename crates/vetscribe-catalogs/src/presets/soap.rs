//! SOAP note presets: common visit presentations.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use vetscribe_core::models::flags::FlagList;
use vetscribe_core::models::section::SectionState;
use vetscribe_core::models::soap::{BodySystem, SoapPatch, SystemPatch};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapPreset {
    pub id: String,
    pub label: String,
    pub patch: SoapPatch,
}

fn normal(system: BodySystem) -> SystemPatch {
    SystemPatch {
        system,
        state: SectionState::normal(),
    }
}

fn abnormal(system: BodySystem, flags: &[&str]) -> SystemPatch {
    SystemPatch {
        system,
        state: SectionState::abnormal(FlagList::from_active(flags.iter().copied())),
    }
}

fn all_normal_except(abnormals: Vec<SystemPatch>) -> Vec<SystemPatch> {
    BodySystem::ALL
        .iter()
        .map(|s| {
            abnormals
                .iter()
                .find(|p| p.system == *s)
                .cloned()
                .unwrap_or_else(|| normal(*s))
        })
        .collect()
}

static PRESETS: LazyLock<Vec<SoapPreset>> = LazyLock::new(|| {
    vec![
        SoapPreset {
            id: "wellness_canine".to_string(),
            label: "Canine wellness visit".to_string(),
            patch: SoapPatch {
                attitude: Some("BAR".to_string()),
                appetite: Some("Normal".to_string()),
                hydration: Some("Euhydrated".to_string()),
                vitals: None,
                systems: all_normal_except(vec![]),
                assessment: Some(
                    "Healthy adult dog; no significant abnormalities on physical examination."
                        .to_string(),
                ),
                plan: Some(
                    "Continue current diet and parasite preventives; recheck in 12 months."
                        .to_string(),
                ),
            },
        },
        SoapPreset {
            id: "back_pain_ivdd".to_string(),
            label: "Back pain / suspected IVDD".to_string(),
            patch: SoapPatch {
                attitude: Some("QAR".to_string()),
                appetite: Some("Reduced".to_string()),
                hydration: Some("Euhydrated".to_string()),
                vitals: None,
                systems: all_normal_except(vec![
                    abnormal(BodySystem::Musculoskeletal, &["spinalPain"]),
                    abnormal(BodySystem::Neurologic, &["paresis", "ataxia"]),
                ]),
                assessment: Some(
                    "Thoracolumbar pain with pelvic limb deficits; intervertebral disc disease suspected."
                        .to_string(),
                ),
                plan: Some(
                    "Strict cage rest, analgesia, and referral for spinal imaging if deficits progress."
                        .to_string(),
                ),
            },
        },
        SoapPreset {
            id: "vestibular_presentation".to_string(),
            label: "Acute vestibular presentation".to_string(),
            patch: SoapPatch {
                attitude: Some("QAR".to_string()),
                appetite: Some("Reduced".to_string()),
                hydration: Some("~5% dehydrated".to_string()),
                vitals: None,
                systems: all_normal_except(vec![
                    abnormal(BodySystem::Ears, &["otitisExterna", "auralDischarge"]),
                    abnormal(BodySystem::Neurologic, &["headTilt", "ataxia"]),
                ]),
                assessment: Some(
                    "Acute vestibular signs with evidence of otitis; peripheral vestibular disease most likely."
                        .to_string(),
                ),
                plan: Some(
                    "Otoscopic examination under sedation, ear cytology, and antiemetic support; imaging if central signs emerge."
                        .to_string(),
                ),
            },
        },
    ]
});

pub fn all() -> &'static [SoapPreset] {
    &PRESETS
}

pub fn get(id: &str) -> Option<&'static SoapPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::flags::FlagList;

/// Tri-state examination status of a section or body system.
///
/// `None` means not examined: the section contributes nothing to the
/// narrative. `Normal` renders the catalog's canned phrase. `Abnormal`
/// renders the recorded flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SectionStatus {
    #[default]
    None,
    Normal,
    Abnormal,
}

/// Per-section state: the status plus the structured findings behind it.
///
/// The composer reads `status` before trusting `data`: records arriving over
/// the wire may carry stale flags on a Normal or None section, and those must
/// never leak into the narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionState {
    pub status: SectionStatus,
    #[serde(default)]
    pub data: FlagList,
    #[serde(default)]
    pub note: String,
}

impl SectionState {
    pub fn normal() -> Self {
        Self {
            status: SectionStatus::Normal,
            ..Self::default()
        }
    }

    pub fn abnormal(data: FlagList) -> Self {
        Self {
            status: SectionStatus::Abnormal,
            data,
            note: String::new(),
        }
    }

    /// Mark not examined. Recorded flags are discarded.
    pub fn set_none(&mut self) {
        self.status = SectionStatus::None;
        self.data.clear();
    }

    /// Mark normal. Recorded flags are discarded, so toggling through Normal
    /// and back to Abnormal starts from an empty flag list.
    pub fn set_normal(&mut self) {
        self.status = SectionStatus::Normal;
        self.data.clear();
    }

    /// Mark abnormal. Flags survive only when the section was already
    /// Abnormal; arriving from None or Normal starts empty.
    pub fn set_abnormal(&mut self) {
        if self.status != SectionStatus::Abnormal {
            self.data.clear();
        }
        self.status = SectionStatus::Abnormal;
    }

    pub fn set_flag(&mut self, id: &str, value: bool) {
        self.data.set(id, value);
    }
}

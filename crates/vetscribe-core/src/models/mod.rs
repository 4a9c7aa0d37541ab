pub mod appointment;
pub mod exam;
pub mod flags;
pub mod mri;
pub mod patient;
pub mod residency;
pub mod section;
pub mod signalment;
pub mod soap;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The three documentation domains a finding record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecordDomain {
    Exam,
    Soap,
    Mri,
}

impl RecordDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordDomain::Exam => "exam",
            RecordDomain::Soap => "soap",
            RecordDomain::Mri => "mri",
        }
    }
}

impl FromStr for RecordDomain {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exam" => Ok(RecordDomain::Exam),
            "soap" => Ok(RecordDomain::Soap),
            "mri" => Ok(RecordDomain::Mri),
            other => Err(CoreError::UnknownDomain(other.to_string())),
        }
    }
}

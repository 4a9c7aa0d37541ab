use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identity and demographic block shared by all three record kinds.
///
/// Template presets never touch these fields: a preset describes a
/// presentation, not a patient. The patch types carry no signalment at all,
/// so the guarantee is structural rather than enforced at merge time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Signalment {
    pub patient_name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub sex: String,
    pub examiner: String,
}

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A selectable finding flag: a stable id plus its display label.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlagDef {
    pub id: String,
    pub label: String,
}

/// A single-select field: stable id, display label, and the ordered allowed
/// values. An empty options list marks a free-text field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectDef {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
}

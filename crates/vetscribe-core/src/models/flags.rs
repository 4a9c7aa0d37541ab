use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One flag assignment inside a section: a stable catalog id and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlagEntry {
    pub id: String,
    pub value: bool,
}

/// Insertion-ordered flag assignments for one section.
///
/// The order in which findings were first recorded drives clause order in the
/// composed narrative, so the order is stored structurally rather than left
/// to map iteration. Serializes as a plain JSON array, which preserves that
/// order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FlagList(Vec<FlagEntry>);

impl FlagList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a flag. An existing entry is updated in place and keeps its
    /// position; a new id is appended at the end.
    pub fn set(&mut self, id: &str, value: bool) {
        if let Some(entry) = self.0.iter_mut().find(|e| e.id == id) {
            entry.value = value;
        } else {
            self.0.push(FlagEntry {
                id: id.to_string(),
                value,
            });
        }
    }

    /// Current value of a flag. Ids never set read as `false`.
    pub fn get(&self, id: &str) -> bool {
        self.0
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.value)
            .unwrap_or(false)
    }

    /// Ids currently set to `true`, in first-set order.
    pub fn active(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter(|e| e.value).map(|e| e.id.as_str())
    }

    pub fn has_active(&self) -> bool {
        self.0.iter().any(|e| e.value)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[FlagEntry] {
        &self.0
    }

    /// Build a list with the given ids all set `true`, in the given order.
    pub fn from_active<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            ids.into_iter()
                .map(|id| FlagEntry {
                    id: id.into(),
                    value: true,
                })
                .collect(),
        )
    }
}

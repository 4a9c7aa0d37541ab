use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Activity categories for residency hour logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResidencyCategory {
    Clinical,
    Neuroimaging,
    Neurosurgery,
    Neuropathology,
    Didactic,
    Research,
}

impl ResidencyCategory {
    pub const ALL: [ResidencyCategory; 6] = [
        ResidencyCategory::Clinical,
        ResidencyCategory::Neuroimaging,
        ResidencyCategory::Neurosurgery,
        ResidencyCategory::Neuropathology,
        ResidencyCategory::Didactic,
        ResidencyCategory::Research,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ResidencyCategory::Clinical => "Clinical caseload",
            ResidencyCategory::Neuroimaging => "Neuroimaging",
            ResidencyCategory::Neurosurgery => "Neurosurgery",
            ResidencyCategory::Neuropathology => "Neuropathology",
            ResidencyCategory::Didactic => "Didactic",
            ResidencyCategory::Research => "Research",
        }
    }
}

/// One logged block of residency hours.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResidencyEntry {
    pub id: Uuid,
    pub entry_date: jiff::civil::Date,
    pub category: ResidencyCategory,
    /// Hours as entered. Parsed leniently at tally time; anything that is
    /// not a number counts as zero.
    pub hours: String,
    #[serde(default)]
    pub notes: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Hour total for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryHours {
    pub category: ResidencyCategory,
    pub hours: f64,
}

/// Sum of parseable hours across entries. Empty or malformed values count
/// as zero instead of failing the tally.
pub fn tally_hours<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a ResidencyEntry>,
{
    entries.into_iter().map(|e| parse_hours(&e.hours)).sum()
}

/// Per-category totals in category order, zero-filled for categories with
/// no entries.
pub fn tally_by_category<'a, I>(entries: I) -> Vec<CategoryHours>
where
    I: IntoIterator<Item = &'a ResidencyEntry>,
{
    let entries: Vec<&ResidencyEntry> = entries.into_iter().collect();
    ResidencyCategory::ALL
        .iter()
        .map(|&category| CategoryHours {
            category,
            hours: entries
                .iter()
                .filter(|e| e.category == category)
                .map(|e| parse_hours(&e.hours))
                .sum(),
        })
        .collect()
}

fn parse_hours(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

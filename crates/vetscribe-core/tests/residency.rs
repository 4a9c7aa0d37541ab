use uuid::Uuid;
use vetscribe_core::models::residency::{
    ResidencyCategory, ResidencyEntry, tally_by_category, tally_hours,
};

fn entry(category: ResidencyCategory, hours: &str) -> ResidencyEntry {
    let now = jiff::Timestamp::now();
    ResidencyEntry {
        id: Uuid::new_v4(),
        entry_date: jiff::civil::date(2026, 1, 15),
        category,
        hours: hours.to_string(),
        notes: String::new(),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn malformed_hours_count_as_zero() {
    let entries = vec![
        entry(ResidencyCategory::Clinical, "8"),
        entry(ResidencyCategory::Clinical, ""),
        entry(ResidencyCategory::Clinical, "four"),
        entry(ResidencyCategory::Clinical, " 2.5 "),
    ];
    assert_eq!(tally_hours(&entries), 10.5);
}

#[test]
fn tally_by_category_zero_fills_in_fixed_order() {
    let entries = vec![
        entry(ResidencyCategory::Neuroimaging, "3"),
        entry(ResidencyCategory::Clinical, "6"),
        entry(ResidencyCategory::Neuroimaging, "1.5"),
    ];

    let totals = tally_by_category(&entries);
    assert_eq!(totals.len(), ResidencyCategory::ALL.len());
    assert_eq!(totals[0].category, ResidencyCategory::Clinical);
    assert_eq!(totals[0].hours, 6.0);
    assert_eq!(totals[1].category, ResidencyCategory::Neuroimaging);
    assert_eq!(totals[1].hours, 4.5);
    // Categories with no entries still appear, at zero.
    assert!(totals[2..].iter().all(|t| t.hours == 0.0));
}

use vetscribe_core::models::section::{SectionState, SectionStatus};

#[test]
fn default_state_is_not_examined() {
    let state = SectionState::default();
    assert_eq!(state.status, SectionStatus::None);
    assert!(state.data.is_empty());
    assert!(state.note.is_empty());
}

#[test]
fn marking_normal_discards_flags() {
    let mut state = SectionState::default();
    state.set_abnormal();
    state.set_flag("depressed", true);

    state.set_normal();
    assert_eq!(state.status, SectionStatus::Normal);
    assert!(state.data.is_empty());
}

#[test]
fn clearing_to_none_discards_flags() {
    let mut state = SectionState::default();
    state.set_abnormal();
    state.set_flag("circlingL", true);

    state.set_none();
    assert_eq!(state.status, SectionStatus::None);
    assert!(state.data.is_empty());
}

#[test]
fn flags_survive_only_while_abnormal() {
    let mut state = SectionState::default();
    state.set_abnormal();
    state.set_flag("depressed", true);

    // Re-asserting Abnormal is a no-op for the data.
    state.set_abnormal();
    assert!(state.data.get("depressed"));

    // A round trip through Normal starts over.
    state.set_normal();
    state.set_abnormal();
    assert!(!state.data.get("depressed"));
    assert!(state.data.is_empty());
}

#[test]
fn none_normal_toggle_clears_both_directions() {
    let mut state = SectionState::abnormal(vetscribe_core::models::flags::FlagList::from_active([
        "obtunded",
    ]));

    state.set_none();
    assert!(state.data.is_empty());

    state.set_normal();
    assert!(state.data.is_empty());

    state.set_none();
    assert_eq!(state.status, SectionStatus::None);
    assert!(state.data.is_empty());
}

use std::sync::Arc;
use storylist_core::{ListState, ListStore, Record, RecordId};

#[test]
fn add_appends_fresh_record_at_the_end() {
    let mut store = ListStore::default();

    let state = store.add("Vue");
    assert_eq!(state.records().len(), 3);

    let added = &state.records()[2];
    assert_eq!(added.title, "Vue");
    assert!(!added.is_complete);
    assert!(matches!(added.id, RecordId::Generated(_)));
    assert_eq!(added.url, None);
    assert_eq!(added.author, None);
    assert_eq!(added.points, None);
    assert_eq!(&state.records()[..2], &ListState::seeded().records()[..]);
}

#[test]
fn add_with_empty_title_is_a_noop() {
    let mut store = ListStore::default();
    let before = store.snapshot();

    let after = store.add(String::new());
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.records().len(), 2);
}

#[test]
fn remove_deletes_exactly_one_record() {
    let mut store = ListStore::default();
    store.add("Vue");
    let before = store.snapshot();

    let after = store.remove(&RecordId::Seed(0));
    assert_eq!(after.records().len(), before.records().len() - 1);
    assert!(after.find(&RecordId::Seed(0)).is_none());
    assert_eq!(after.records(), &before.records()[1..]);
}

#[test]
fn remove_unknown_id_keeps_list_value_equal() {
    let mut store = ListStore::default();
    let before = store.snapshot();

    let after = store.remove(&RecordId::Generated(uuid::Uuid::new_v4()));
    assert_eq!(*after, *before);
}

#[test]
fn toggle_twice_restores_completion() {
    let mut store = ListStore::default();
    let original = store.snapshot();

    let once = store.toggle_complete(&RecordId::Seed(0));
    assert!(once.records()[0].is_complete);
    assert_eq!(once.records()[1], original.records()[1]);

    let twice = store.toggle_complete(&RecordId::Seed(0));
    assert_eq!(*twice, *original);
}

#[test]
fn gating_follows_draft_content() {
    let mut store = ListStore::new(ListState::from_records(vec![Record::new("only")]).unwrap());

    let enabled = store.set_draft_gating(true);
    assert!(!enabled.is_disabled());
    assert!(enabled.is_show_list());

    let disabled = store.set_draft_gating(false);
    assert!(disabled.is_disabled());
    assert!(disabled.is_show_list());
}

#[test]
fn ids_stay_unique_across_many_adds() {
    let mut store = ListStore::default();
    for index in 0..50 {
        store.add(format!("record {index}"));
    }

    let state = store.snapshot();
    let ids = state
        .records()
        .iter()
        .map(|record| record.id)
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(ids.len(), state.records().len());
    assert_eq!(state.records().len(), 52);
}

use student_roster::{
    reduce, seed_students, visible_records, Action, DraftField, RawAction, RosterState, Store,
};

fn seeded_store() -> Store {
    Store::new(RosterState::with_students(seed_students()))
}

fn fnames(store: &Store) -> Vec<String> {
    store
        .visible_records()
        .iter()
        .map(|s| s.fname.clone())
        .collect()
}

#[test]
fn search_scenario_over_seed_data() {
    let mut store = seeded_store();
    store.dispatch(Action::SetSearchTerm("ma".to_string()));
    store.dispatch(Action::FilterRecords);
    assert_eq!(fnames(&store), vec!["Mani", "Manoj"]);

    store.dispatch(Action::ResetFilter);
    assert_eq!(fnames(&store).len(), 5);
}

#[test]
fn inserted_ids_never_collide() {
    let mut store = seeded_store();
    store.dispatch(Action::DeleteRecord(5));
    store.dispatch(Action::DeleteRecord(2));

    for name in ["Asha", "Bala", "Chitra"] {
        store.dispatch(Action::UpdateDraftField(DraftField::Fname, name.to_string()));
        store.dispatch(Action::InsertRecord);
    }

    let mut ids: Vec<i64> = store.state().students.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 3, 4, 5, 6, 7]);
    ids.dedup();
    assert_eq!(ids.len(), 6);
}

#[test]
fn raw_commands_drive_the_same_transitions() {
    let commands = r#"[
        {"type": "UPDATE_NEW_STUDENT", "field": "fname", "value": "Kavya"},
        {"type": "UPDATE_NEW_STUDENT", "field": "state", "value": "Goa"},
        {"type": "INSERT_DATA"},
        {"type": "DELETE_DATA", "payload": 1},
        {"type": "NOT_A_THING", "payload": "ignored"},
        {"type": "SORT_ASC"},
        {"type": "SET_SEARCH_TERM", "payload": "AV"},
        {"type": "FILTER_STUDENTS"}
    ]"#;
    let raws: Vec<RawAction> = serde_json::from_str(commands).unwrap();

    let mut store = seeded_store();
    for raw in raws {
        store.dispatch_raw(raw);
    }

    let sorted: Vec<&str> = store
        .state()
        .students
        .iter()
        .map(|s| s.fname.as_str())
        .collect();
    assert_eq!(sorted, vec!["Abu", "Hari", "Kavya", "Mani", "Manoj"]);
    assert_eq!(fnames(&store), vec!["Kavya"]);
    assert_eq!(store.visible_records()[0].id, 6);
    assert_eq!(store.visible_records()[0].state, "Goa");
}

#[test]
fn stale_filter_survives_delete_until_reset() {
    let state = RosterState::with_students(seed_students());
    let state = reduce(&state, &Action::SetSearchTerm("hari".to_string()));
    let state = reduce(&state, &Action::FilterRecords);
    let state = reduce(&state, &Action::DeleteRecord(2));

    assert!(state.students.iter().all(|s| s.id != 2));
    assert_eq!(visible_records(&state)[0].fname, "Hari");

    let state = reduce(&state, &Action::FilterRecords);
    assert_eq!(visible_records(&state).len(), 4);
}

#[test]
fn text_delete_id_leaves_roster_unchanged() {
    let raw: RawAction = serde_json::from_str(r#"{"type": "DELETE_DATA", "payload": "4"}"#).unwrap();
    let mut store = seeded_store();
    let before = store.state().clone();
    store.dispatch_raw(raw);
    assert_eq!(store.state(), &before);
    assert_eq!(store.state().students.len(), 5);
}

use log::debug;

use crate::models::{DraftStudent, Student};

use super::action::{Action, RawAction};
use super::reducer::reduce;

/// Everything the roster screen renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterState {
    /// Canonical roster, in insertion order until a sort reorders it.
    pub students: Vec<Student>,
    /// Text in the search box. Only applied when a filter is triggered.
    pub search_term: String,
    /// Result of the last filter. Empty means no filter is active. Deletes do
    /// not touch it, so a removed student stays listed here until the next
    /// filter or reset.
    pub filtered_students: Vec<Student>,
    /// Staging record behind the insert form.
    pub new_student: DraftStudent,
}

impl RosterState {
    /// Start from a given roster with an empty search box, no active filter
    /// and a blank draft. Ids are taken as-is; callers supplying their own
    /// rows are responsible for keeping them unique.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students,
            ..Self::default()
        }
    }

    /// Method form of [`visible_records`].
    pub fn visible_records(&self) -> &[Student] {
        visible_records(self)
    }

    /// Whether the table is currently showing a search result. A filter
    /// that matched nothing counts as inactive, because an empty result is
    /// indistinguishable from "no filter".
    pub fn filter_active(&self) -> bool {
        !self.filtered_students.is_empty()
    }
}

/// The filtered view when it has rows, otherwise the whole roster.
pub fn visible_records(state: &RosterState) -> &[Student] {
    if state.filtered_students.is_empty() {
        &state.students
    } else {
        &state.filtered_students
    }
}

/// Owns the current [`RosterState`] and swaps it out wholesale on every
/// dispatch.
#[derive(Debug, Default)]
pub struct Store {
    state: RosterState,
}

impl Store {
    /// Wrap an initial state. `main` builds it from the seed roster or an
    /// empty one depending on the settings file.
    pub fn new(state: RosterState) -> Self {
        Self { state }
    }

    /// Current snapshot. Every dispatch replaces it, so the reference is only
    /// good until the next action.
    pub fn state(&self) -> &RosterState {
        &self.state
    }

    /// Rows the table should show right now.
    pub fn visible_records(&self) -> &[Student] {
        self.state.visible_records()
    }

    /// Run `action` through [`reduce`] and swap in the result. Every action
    /// is logged at debug level so a session can be replayed from the log.
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {action:?}");
        self.state = reduce(&self.state, &action);
    }

    /// Dispatch an untyped command. Anything that does not decode to a known
    /// action leaves the state as it was.
    pub fn dispatch_raw(&mut self, raw: RawAction) {
        match Action::try_from(raw) {
            Ok(action) => self.dispatch(action),
            Err(err) => debug!("ignoring action: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_students;

    #[test]
    fn visible_falls_back_to_full_roster() {
        let mut store = Store::new(RosterState::with_students(seed_students()));
        assert_eq!(store.visible_records().len(), 5);

        store.dispatch(Action::SetSearchTerm("MA".to_string()));
        store.dispatch(Action::FilterRecords);
        assert_eq!(store.visible_records().len(), 2);
        assert!(store.state().filter_active());
    }

    #[test]
    fn filter_with_no_match_shows_everything() {
        let mut store = Store::new(RosterState::with_students(seed_students()));
        store.dispatch(Action::SetSearchTerm("zzz".to_string()));
        store.dispatch(Action::FilterRecords);
        assert!(!store.state().filter_active());
        assert_eq!(store.visible_records().len(), 5);
    }

    #[test]
    fn unknown_raw_kind_is_ignored() {
        let mut store = Store::new(RosterState::with_students(seed_students()));
        let before = store.state().clone();
        store.dispatch_raw(RawAction::new("SHUFFLE"));
        store.dispatch_raw(RawAction::new("DELETE_DATA").with_payload("not-a-number"));
        assert_eq!(store.state(), &before);

        store.dispatch_raw(RawAction::new("DELETE_DATA").with_payload("1"));
        assert_eq!(store.state(), &before);

        store.dispatch_raw(RawAction::new("DELETE_DATA").with_payload(1));
        assert_eq!(store.state().students.len(), 4);
    }
}

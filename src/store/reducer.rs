use crate::models::{DraftStudent, Student};

use super::action::Action;
use super::collate::compare_names;
use super::state::RosterState;

/// Apply one action to `state` and return the resulting state. The input is
/// never modified, and no action can fail: a delete of a missing id or an
/// insert of a blank draft simply produce the obvious result.
pub fn reduce(state: &RosterState, action: &Action) -> RosterState {
    match action {
        Action::SetSearchTerm(text) => RosterState {
            search_term: text.clone(),
            ..state.clone()
        },
        Action::FilterRecords => {
            let needle = state.search_term.to_lowercase();
            let filtered = state
                .students
                .iter()
                .filter(|s| s.fname.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            RosterState {
                filtered_students: filtered,
                ..state.clone()
            }
        }
        Action::ResetFilter => RosterState {
            filtered_students: Vec::new(),
            ..state.clone()
        },
        Action::InsertRecord => {
            let id = next_id(&state.students);
            let mut students = state.students.clone();
            students.push(Student::from_draft(id, &state.new_student));
            RosterState {
                students,
                new_student: DraftStudent::default(),
                ..state.clone()
            }
        }
        Action::DeleteRecord(id) => RosterState {
            students: state
                .students
                .iter()
                .filter(|s| s.id != *id)
                .cloned()
                .collect(),
            ..state.clone()
        },
        Action::SortAscending => {
            let mut students = state.students.clone();
            students.sort_by(|a, b| compare_names(&a.fname, &b.fname));
            RosterState {
                students,
                ..state.clone()
            }
        }
        Action::SortDescending => {
            let mut students = state.students.clone();
            students.sort_by(|a, b| compare_names(&b.fname, &a.fname));
            RosterState {
                students,
                ..state.clone()
            }
        }
        Action::ToLowercase => map_case(state, |s| s.to_lowercase()),
        Action::ToUppercase => map_case(state, |s| s.to_uppercase()),
        Action::UpdateDraftField(field, value) => {
            let mut new_student = state.new_student.clone();
            new_student.set(*field, value.clone());
            RosterState {
                new_student,
                ..state.clone()
            }
        }
    }
}

/// One more than the largest id on the roster, or 1 when it is empty. When
/// the largest id is already `i64::MAX` there is no "one more", so the
/// smallest unused positive id is handed out instead.
pub fn next_id(students: &[Student]) -> i64 {
    let max = students
        .iter()
        .map(|s| s.id)
        .fold(None, |max: Option<i64>, id| Some(max.map_or(id, |m| m.max(id))));

    match max {
        None => 1,
        Some(max) => max
            .checked_add(1)
            .unwrap_or_else(|| smallest_unused_id(students)),
    }
}

fn smallest_unused_id(students: &[Student]) -> i64 {
    let mut taken: Vec<i64> = students.iter().map(|s| s.id).filter(|id| *id > 0).collect();
    taken.sort_unstable();
    taken.dedup();
    let mut candidate = 1;
    for id in taken {
        if id != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}

fn map_case(state: &RosterState, convert: impl Fn(&str) -> String) -> RosterState {
    let students = state
        .students
        .iter()
        .map(|s| Student {
            fname: convert(&s.fname),
            language: convert(&s.language),
            state: convert(&s.state),
            ..s.clone()
        })
        .collect();
    RosterState {
        students,
        ..state.clone()
    }
}

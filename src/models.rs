//! Domain models shared by the store and the TUI. These stay plain data
//! holders; every rule about how they change lives in the reducer.

use std::fmt;
use std::str::FromStr;

use crate::store::ActionError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One row of the roster table.
pub struct Student {
    /// Unique within the active roster. Assigned on insert as one more than
    /// the largest id present.
    pub id: i64,
    /// First name. Search, sort and case transforms all key off this field.
    pub fname: String,
    /// Kept as text: the insert form accepts whatever was typed.
    pub age: String,
    pub language: String,
    pub phone_number: String,
    /// Free text, never parsed.
    pub dob: String,
    pub state: String,
}

impl Student {
    /// Commit a draft under the given id.
    pub fn from_draft(id: i64, draft: &DraftStudent) -> Self {
        Self {
            id,
            fname: draft.fname.clone(),
            age: draft.age.clone(),
            language: draft.language.clone(),
            phone_number: draft.phone_number.clone(),
            dob: draft.dob.clone(),
            state: draft.state.clone(),
        }
    }

    /// Cells in table column order, without the trailing actions column.
    pub fn cells(&self) -> [&str; 6] {
        [
            &self.fname,
            &self.age,
            &self.language,
            &self.phone_number,
            &self.dob,
            &self.state,
        ]
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fname)
    }
}

/// The record being composed in the insert form. It has no id until it is
/// committed, and every field is raw text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftStudent {
    pub fname: String,
    pub age: String,
    pub language: String,
    pub phone_number: String,
    pub dob: String,
    pub state: String,
}

impl DraftStudent {
    /// Read one field by name. The form renders through this so every input
    /// line stays bound to the draft held in the store rather than a copy.
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Fname => &self.fname,
            DraftField::Age => &self.age,
            DraftField::Language => &self.language,
            DraftField::PhoneNumber => &self.phone_number,
            DraftField::Dob => &self.dob,
            DraftField::State => &self.state,
        }
    }

    /// Overwrite one field. Values are stored exactly as typed; the insert
    /// path deliberately accepts blank or non-numeric input.
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Fname => &mut self.fname,
            DraftField::Age => &mut self.age,
            DraftField::Language => &mut self.language,
            DraftField::PhoneNumber => &mut self.phone_number,
            DraftField::Dob => &mut self.dob,
            DraftField::State => &mut self.state,
        };
        *slot = value;
    }
}

/// Named fields of the draft, in form order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DraftField {
    #[default]
    Fname,
    Age,
    Language,
    PhoneNumber,
    Dob,
    State,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Fname,
        DraftField::Age,
        DraftField::Language,
        DraftField::PhoneNumber,
        DraftField::Dob,
        DraftField::State,
    ];

    /// Label shown next to the input and in the table header.
    pub fn label(self) -> &'static str {
        match self {
            DraftField::Fname => "Name",
            DraftField::Age => "Age",
            DraftField::Language => "Language",
            DraftField::PhoneNumber => "Phone Number",
            DraftField::Dob => "DOB",
            DraftField::State => "State",
        }
    }

    /// Wire name used by the textual command surface.
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Fname => "fname",
            DraftField::Age => "age",
            DraftField::Language => "language",
            DraftField::PhoneNumber => "phoneNumber",
            DraftField::Dob => "dob",
            DraftField::State => "state",
        }
    }

    /// Field after this one in form order, wrapping from State back to Name
    /// so Tab cycles endlessly through the popup.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Field before this one in form order, wrapping from Name to State.
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl FromStr for DraftField {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| ActionError::UnknownField(s.to_string()))
    }
}

/// The five students every session starts with.
pub fn seed_students() -> Vec<Student> {
    let rows = [
        (1, "Jeeva", "20", "Tamil", "9897735209", "07-06-2004", "Tamil Nadu"),
        (2, "Hari", "50", "Malayalam", "7309765433", "28-10-2002", "Kerala"),
        (3, "Mani", "36", "Telugu", "8870128610", "23-11-2001", "Bengaluru"),
        (4, "Manoj", "28", "Hindi", "7765328765", "17-04-2004", "Delhi"),
        (5, "Abu", "57", "Kannada", "8765432193", "01-01-2000", "Andhra Pradesh"),
    ];

    rows.into_iter()
        .map(|(id, fname, age, language, phone, dob, state)| Student {
            id,
            fname: fname.to_string(),
            age: age.to_string(),
            language: language.to_string(),
            phone_number: phone.to_string(),
            dob: dob.to_string(),
            state: state.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_field_keys_parse_back() {
        for field in DraftField::ALL {
            assert_eq!(field.key().parse::<DraftField>().unwrap(), field);
        }
        assert!(matches!(
            "nickname".parse::<DraftField>(),
            Err(ActionError::UnknownField(name)) if name == "nickname"
        ));
    }

    #[test]
    fn field_focus_wraps_both_ways() {
        assert_eq!(DraftField::State.next(), DraftField::Fname);
        assert_eq!(DraftField::Fname.prev(), DraftField::State);
        assert_eq!(DraftField::Age.next(), DraftField::Language);
    }

    #[test]
    fn seed_ids_are_sequential() {
        let ids: Vec<i64> = seed_students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}

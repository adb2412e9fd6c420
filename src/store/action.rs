use serde::Deserialize;
use thiserror::Error;

use crate::models::DraftField;

/// Every transition the roster understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetSearchTerm(String),
    FilterRecords,
    ResetFilter,
    InsertRecord,
    DeleteRecord(i64),
    SortAscending,
    SortDescending,
    ToLowercase,
    ToUppercase,
    UpdateDraftField(DraftField, String),
}

/// Reasons a [`RawAction`] could not be turned into an [`Action`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown action kind `{0}`")]
    UnknownKind(String),
    #[error("action `{kind}` requires a `{name}`")]
    Missing { kind: &'static str, name: &'static str },
    #[error("`{0}` is not a valid student id")]
    InvalidId(String),
    #[error("unknown draft field `{0}`")]
    UnknownField(String),
}

/// Untyped command as a front-end would send it: a kind tag plus optional
/// payload, field and value. Deserializes from `{"type": ..., ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Option<Payload>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl RawAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    pub fn with_payload(mut self, payload: impl Into<Payload>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self.value = Some(value.into());
        self
    }
}

impl TryFrom<RawAction> for Action {
    type Error = ActionError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let action = match raw.kind.as_str() {
            "SET_SEARCH_TERM" => {
                let text = raw.payload.ok_or(ActionError::Missing {
                    kind: "SET_SEARCH_TERM",
                    name: "payload",
                })?;
                Action::SetSearchTerm(text.into_text())
            }
            "FILTER_STUDENTS" => Action::FilterRecords,
            "RESET_STUDENTS" => Action::ResetFilter,
            "INSERT_DATA" => Action::InsertRecord,
            "DELETE_DATA" => {
                let id = raw.payload.ok_or(ActionError::Missing {
                    kind: "DELETE_DATA",
                    name: "payload",
                })?;
                Action::DeleteRecord(id.into_id()?)
            }
            "SORT_ASC" => Action::SortAscending,
            "SORT_DESC" => Action::SortDescending,
            "LOWERCASE" => Action::ToLowercase,
            "UPPERCASE" => Action::ToUppercase,
            "UPDATE_NEW_STUDENT" => {
                let field = raw.field.ok_or(ActionError::Missing {
                    kind: "UPDATE_NEW_STUDENT",
                    name: "field",
                })?;
                let field = field.parse::<DraftField>()?;
                Action::UpdateDraftField(field, raw.value.unwrap_or_default())
            }
            other => return Err(ActionError::UnknownKind(other.to_string())),
        };
        Ok(action)
    }
}

/// A payload is either text (search terms) or an integer (ids). Ids must
/// arrive as integers: text never matches an id, even when it looks numeric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Id(i64),
    Text(String),
}

impl Payload {
    fn into_text(self) -> String {
        match self {
            Payload::Id(id) => id.to_string(),
            Payload::Text(text) => text,
        }
    }

    fn into_id(self) -> Result<i64, ActionError> {
        match self {
            Payload::Id(id) => Ok(id),
            Payload::Text(text) => Err(ActionError::InvalidId(text)),
        }
    }
}

impl From<i64> for Payload {
    fn from(id: i64) -> Self {
        Payload::Id(id)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Text(text.to_string())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Text(text)
    }
}

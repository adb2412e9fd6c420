use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::{DraftField, DraftStudent, Student};
use crate::store::Action;

/// Focus tracking for the insert form. The field values themselves live in
/// the store's draft, so every keystroke becomes an `UpdateDraftField`.
#[derive(Default, Clone)]
pub(crate) struct DraftForm {
    pub(crate) active: DraftField,
}

impl DraftForm {
    pub(crate) fn next_field(&mut self) {
        self.active = self.active.next();
    }

    pub(crate) fn prev_field(&mut self) {
        self.active = self.active.prev();
    }

    /// Append a character to the active field. Control characters are
    /// rejected; anything printable is accepted, digits or not.
    pub(crate) fn push_char(&self, draft: &DraftStudent, ch: char) -> Option<Action> {
        if ch.is_control() {
            return None;
        }
        let mut value = draft.get(self.active).to_string();
        value.push(ch);
        Some(Action::UpdateDraftField(self.active, value))
    }

    /// Remove the last character from the active field, if there is one.
    pub(crate) fn backspace(&self, draft: &DraftStudent) -> Option<Action> {
        let mut value = draft.get(self.active).to_string();
        value.pop()?;
        Some(Action::UpdateDraftField(self.active, value))
    }

    pub(crate) fn build_line(&self, draft: &DraftStudent, field: DraftField) -> Line<'static> {
        let value = draft.get(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            "<empty>".to_string()
        } else {
            value.to_string()
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Column where the cursor sits for the active field, relative to the
    /// start of its line.
    pub(crate) fn cursor_offset(&self, draft: &DraftStudent) -> usize {
        let prefix = self.active.label().chars().count() + 2;
        prefix + draft.get(self.active).chars().count()
    }

    /// Row of the active field within the form.
    pub(crate) fn cursor_row(&self) -> u16 {
        DraftField::ALL
            .iter()
            .position(|f| *f == self.active)
            .unwrap_or(0) as u16
    }
}

#[derive(Clone)]
pub(crate) struct ConfirmStudentDelete {
    pub(crate) id: i64,
    pub(crate) fname: String,
}

impl ConfirmStudentDelete {
    pub(crate) fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            fname: student.fname.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_targets_active_field() {
        let mut form = DraftForm::default();
        let mut draft = DraftStudent::default();
        draft.fname = "Pri".to_string();

        assert_eq!(
            form.push_char(&draft, 'y'),
            Some(Action::UpdateDraftField(DraftField::Fname, "Priy".to_string()))
        );

        form.next_field();
        assert_eq!(
            form.push_char(&draft, 'x'),
            Some(Action::UpdateDraftField(DraftField::Age, "x".to_string()))
        );
        assert_eq!(form.push_char(&draft, '\u{7}'), None);
    }

    #[test]
    fn backspace_on_empty_field_does_nothing() {
        let form = DraftForm::default();
        let draft = DraftStudent::default();
        assert_eq!(form.backspace(&draft), None);
    }

    #[test]
    fn cursor_tracks_label_and_value() {
        let mut form = DraftForm::default();
        let mut draft = DraftStudent::default();
        draft.phone_number = "98".to_string();
        form.active = DraftField::PhoneNumber;
        assert_eq!(form.cursor_offset(&draft), "Phone Number: 98".len());
        assert_eq!(form.cursor_row(), 3);
    }
}

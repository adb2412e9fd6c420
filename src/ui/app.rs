use std::mem;

use crossterm::event::KeyCode;
use log::info;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::models::DraftField;
use crate::store::{Action, Store};

use super::forms::{ConfirmStudentDelete, DraftForm};
use super::helpers::{centered_rect, cursor_column, key_hints};
use super::screens::RosterTable;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Height of the search box above the table.
const SEARCH_HEIGHT: u16 = 3;
/// Rows skipped by PageUp/PageDown.
const PAGE_STEP: isize = 5;
/// Table headers, in column order.
const HEADERS: [&str; 7] = [
    "Name",
    "Age",
    "Language",
    "Phone Number",
    "DOB",
    "State",
    "Actions",
];

/// Which input currently owns the keyboard.
enum Mode {
    Normal,
    Searching,
    EditingDraft(DraftForm),
    ConfirmDelete(ConfirmStudentDelete),
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    store: Store,
    table: RosterTable,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    /// Build the UI around an already-populated store. The table starts with
    /// the first row selected and no popup open.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            table: RosterTable::default(),
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Read access to the underlying store, mainly so callers and tests can
    /// inspect the roster after driving keys through [`App::handle_key`].
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Feed one key press through the active mode. Returns `true` when the
    /// user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mode = mem::replace(&mut self.mode, Mode::Normal);

        self.mode = match mode {
            Mode::Normal => self.handle_normal_key(code, &mut exit),
            Mode::Searching => self.handle_search(code),
            Mode::EditingDraft(form) => self.handle_draft(code, form),
            Mode::ConfirmDelete(confirm) => self.handle_confirm_delete(code, confirm),
        };

        let len = self.store.visible_records().len();
        self.table.ensure_in_bounds(len);
        exit
    }

    fn handle_normal_key(&mut self, code: KeyCode, exit: &mut bool) -> Mode {
        let len = self.store.visible_records().len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                *exit = true;
            }
            KeyCode::Up => self.table.move_selection(-1, len),
            KeyCode::Down => self.table.move_selection(1, len),
            KeyCode::PageUp => self.table.move_selection(-PAGE_STEP, len),
            KeyCode::PageDown => self.table.move_selection(PAGE_STEP, len),
            KeyCode::Home => self.table.select_first(),
            KeyCode::End => self.table.select_last(len),
            KeyCode::Char('/') | KeyCode::Char('f') => {
                self.clear_status();
                return Mode::Searching;
            }
            KeyCode::Char('r') => {
                self.store.dispatch(Action::ResetFilter);
                self.set_status("Showing all students.", StatusKind::Info);
            }
            KeyCode::Char('+') | KeyCode::Char('i') => {
                self.clear_status();
                return Mode::EditingDraft(DraftForm::default());
            }
            KeyCode::Char('-') | KeyCode::Char('d') => {
                let selected = self.store.visible_records().get(self.table.selected);
                if let Some(student) = selected {
                    let confirm = ConfirmStudentDelete::from(student);
                    self.clear_status();
                    return Mode::ConfirmDelete(confirm);
                }
                self.set_status("No student selected to delete.", StatusKind::Error);
            }
            KeyCode::Char('a') => {
                self.store.dispatch(Action::SortAscending);
                self.set_status("Sorted A-Z.", StatusKind::Info);
            }
            KeyCode::Char('z') => {
                self.store.dispatch(Action::SortDescending);
                self.set_status("Sorted Z-A.", StatusKind::Info);
            }
            KeyCode::Char('l') => {
                self.store.dispatch(Action::ToLowercase);
                self.set_status("Converted to lowercase.", StatusKind::Info);
            }
            KeyCode::Char('u') => {
                self.store.dispatch(Action::ToUppercase);
                self.set_status("Converted to uppercase.", StatusKind::Info);
            }
            _ => {}
        }
        Mode::Normal
    }

    fn handle_search(&mut self, code: KeyCode) -> Mode {
        let term = &self.store.state().search_term;
        match code {
            KeyCode::Esc => return Mode::Normal,
            KeyCode::Enter => {
                self.store.dispatch(Action::FilterRecords);
                self.table.select_first();
                let state = self.store.state();
                let message = if state.filter_active() {
                    let count = state.filtered_students.len();
                    let noun = if count == 1 { "student" } else { "students" };
                    format!("{count} {noun} match \"{}\".", state.search_term)
                } else {
                    "No matches; showing all students.".to_string()
                };
                self.set_status(message, StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Backspace => {
                let mut term = term.clone();
                if term.pop().is_some() {
                    self.store.dispatch(Action::SetSearchTerm(term));
                }
            }
            KeyCode::Char(ch) if !ch.is_control() => {
                let mut term = term.clone();
                term.push(ch);
                self.store.dispatch(Action::SetSearchTerm(term));
            }
            _ => {}
        }
        Mode::Searching
    }

    fn handle_draft(&mut self, code: KeyCode, mut form: DraftForm) -> Mode {
        let draft = &self.store.state().new_student;
        match code {
            KeyCode::Esc => {
                self.set_status("Insert closed; draft kept.", StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => {
                if let Some(action) = form.backspace(draft) {
                    self.store.dispatch(action);
                }
            }
            KeyCode::Enter => {
                let name = draft.fname.clone();
                self.store.dispatch(Action::InsertRecord);
                if let Some(student) = self.store.state().students.last() {
                    info!("inserted student {} ({name})", student.id);
                }
                let len = self.store.visible_records().len();
                self.table.select_last(len);
                self.set_status(format!("Inserted {name}."), StatusKind::Info);
                return Mode::Normal;
            }
            KeyCode::Char(ch) => {
                if let Some(action) = form.push_char(draft, ch) {
                    self.store.dispatch(action);
                }
            }
            _ => {}
        }
        Mode::EditingDraft(form)
    }

    fn handle_confirm_delete(&mut self, code: KeyCode, confirm: ConfirmStudentDelete) -> Mode {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.set_status("Deletion cancelled.", StatusKind::Info);
                Mode::Normal
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.store.dispatch(Action::DeleteRecord(confirm.id));
                info!("deleted student {} ({})", confirm.id, confirm.fname);
                self.set_status(format!("Deleted {}.", confirm.fname), StatusKind::Info);
                Mode::Normal
            }
            _ => Mode::ConfirmDelete(confirm),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_search_bar(frame, chunks[0]);
        self.draw_table(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);

        match &self.mode {
            Mode::EditingDraft(form) => self.draw_draft_form(frame, area, form),
            Mode::ConfirmDelete(confirm) => self.draw_confirm_delete(frame, area, confirm),
            Mode::Searching | Mode::Normal => {}
        }
    }

    fn draw_search_bar(&self, frame: &mut Frame, area: Rect) {
        let searching = matches!(self.mode, Mode::Searching);
        let term = &self.store.state().search_term;
        let border_style = if searching {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let content = if term.is_empty() && !searching {
            Span::styled("Search by name...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(term.clone())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(content).block(block), area);

        if searching {
            let cursor_x = cursor_column(inner.x, term.chars().count(), inner.right());
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_table(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let title = if state.filter_active() {
            format!(
                "Students ({} of {} shown)",
                state.filtered_students.len(),
                state.students.len()
            )
        } else {
            format!("Students ({})", state.students.len())
        };
        let block = Block::default().borders(Borders::ALL).title(title);

        let visible = self.store.visible_records();
        if visible.is_empty() {
            let message = Paragraph::new("No students yet. Press '+' to add one.")
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let header = Row::new(HEADERS.iter().map(|h| {
            Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
        }));
        let rows = visible.iter().map(|student| {
            let mut cells: Vec<Cell> = student
                .cells()
                .into_iter()
                .map(|value| Cell::from(value.to_string()))
                .collect();
            cells.push(Cell::from("[Delete]").style(Style::default().fg(Color::Red)));
            Row::new(cells)
        });
        let widths = [
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Min(12),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .block(block)
            .row_highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
        let mut table_state = TableState::default().with_selected(Some(self.table.selected));
        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph =
            Paragraph::new(vec![status_line, self.footer_instructions()]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        match &self.mode {
            Mode::Searching => key_hints(&[("Enter", "Search"), ("Esc", "Back")]),
            Mode::EditingDraft(_) => key_hints(&[
                ("Tab", "Next Field"),
                ("Enter", "Insert"),
                ("Esc", "Close"),
            ]),
            Mode::ConfirmDelete(_) => key_hints(&[("y", "Delete"), ("n", "Cancel")]),
            Mode::Normal => key_hints(&[
                ("↑↓", "Select"),
                ("/", "Search"),
                ("r", "Reset"),
                ("+", "Insert"),
                ("-", "Delete"),
                ("a", "Sort A-Z"),
                ("z", "Sort Z-A"),
                ("l", "Lowercase"),
                ("u", "Uppercase"),
                ("q", "Quit"),
            ]),
        }
    }

    fn draw_draft_form(&self, frame: &mut Frame, area: Rect, form: &DraftForm) {
        let popup_area = centered_rect(60, 50, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default().title("Insert Student").borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let draft = &self.store.state().new_student;
        let mut lines: Vec<Line> = DraftField::ALL
            .iter()
            .map(|field| form.build_line(draft, *field))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter to insert / Tab to switch / Esc to close",
            Style::default().fg(Color::Gray),
        )));

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);

        let cursor_x = cursor_column(inner.x, form.cursor_offset(draft), inner.right());
        let cursor_y = inner.y.saturating_add(form.cursor_row());
        frame.set_cursor_position((cursor_x, cursor_y));
    }

    fn draw_confirm_delete(&self, frame: &mut Frame, area: Rect, confirm: &ConfirmStudentDelete) {
        let popup_area = centered_rect(50, 25, area);
        frame.render_widget(Clear, popup_area);

        let lines = vec![
            Line::from(Span::styled(
                format!("Delete {}?", confirm.fname),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("y / Enter to delete, n / Esc to cancel"),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Confirm Delete").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, popup_area);
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

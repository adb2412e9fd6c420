//! Core library surface for the Student Roster TUI.
//!
//! The roster state and its reducer live in [`store`]; the binary only wires
//! settings, logging and the terminal loop around them, so other front-ends
//! can drive the same actions.
pub mod config;
pub mod logging;
pub mod models;
pub mod paths;
pub mod store;
pub mod ui;

pub use config::Settings;

/// The domain types every layer passes around.
pub use models::{seed_students, DraftField, DraftStudent, Student};

/// State container and its command surface.
pub use store::{reduce, visible_records, Action, ActionError, RawAction, RosterState, Store};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};

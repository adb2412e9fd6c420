//! Ratatui front-end: one table screen with a search bar, an insert popup and
//! a delete confirmation.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;

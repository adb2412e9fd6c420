//! Binary entry point: read settings, start the file logger, seed the roster,
//! and drive the Ratatui event loop until the user exits.
use log::info;
use student_roster::{logging, run_app, seed_students, App, RosterState, Settings, Store};

fn main() -> anyhow::Result<()> {
    let settings_path = Settings::default_path()?;
    let settings = Settings::load(&settings_path)?;
    logging::init(&settings)?;
    info!("settings loaded from {}", settings_path.display());

    let students = if settings.seed_records {
        seed_students()
    } else {
        Vec::new()
    };
    info!("starting with {} students", students.len());

    let mut app = App::new(Store::new(RosterState::with_students(students)));
    run_app(&mut app)
}

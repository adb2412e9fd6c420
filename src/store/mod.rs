//! In-memory roster store split across logical submodules.

mod action;
mod collate;
mod reducer;
mod state;

pub use action::{Action, ActionError, Payload, RawAction};
pub use collate::compare_names;
pub use reducer::{next_id, reduce};
pub use state::{visible_records, RosterState, Store};

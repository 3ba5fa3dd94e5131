pub mod form;
pub mod path;
pub mod roster;

pub use form::{AttendanceForm, FormField};
pub use path::resolve_data_dir;
pub use roster::{RECENT_LIMIT, Roster, RosterRow, Stripe};

pub mod record;
pub mod status;
mod util;

pub use record::{AttendanceRecord, NewRecord, RecordId};
pub use status::AttendanceStatus;
pub use util::format_local_timestamp;

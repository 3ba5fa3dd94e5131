use crate::status::AttendanceStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned surrogate key. Unique and monotonic by insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted attendance entry. Append-only: never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub student_name: String,
    pub student_nim: String,
    pub student_faculty: String,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

/// Field values for a record about to be appended. The id is assigned by
/// the store at insert time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub student_name: String,
    pub student_nim: String,
    pub student_faculty: String,
    pub status: AttendanceStatus,
    pub timestamp: DateTime<Utc>,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Attendance status for a single roll-call entry.
///
/// Persisted and displayed with the original Indonesian labels
/// ("Hadir", "Tidak Hadir", "Izin", "Sakit").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
    Sick,
}

impl AttendanceStatus {
    /// All statuses, in selection order. The first entry is the default.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Excused,
        AttendanceStatus::Sick,
    ];

    /// Storage and display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Hadir",
            AttendanceStatus::Absent => "Tidak Hadir",
            AttendanceStatus::Excused => "Izin",
            AttendanceStatus::Sick => "Sakit",
        }
    }

    /// Next status in selection order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Absent,
            AttendanceStatus::Absent => AttendanceStatus::Excused,
            AttendanceStatus::Excused => AttendanceStatus::Sick,
            AttendanceStatus::Sick => AttendanceStatus::Present,
        }
    }

    /// Previous status in selection order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            AttendanceStatus::Present => AttendanceStatus::Sick,
            AttendanceStatus::Absent => AttendanceStatus::Present,
            AttendanceStatus::Excused => AttendanceStatus::Absent,
            AttendanceStatus::Sick => AttendanceStatus::Excused,
        }
    }
}

impl Default for AttendanceStatus {
    fn default() -> Self {
        AttendanceStatus::Present
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for unrecognized status labels read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError(pub String);

impl fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown attendance status: '{}'", self.0)
    }
}

impl std::error::Error for ParseStatusError {}

impl FromStr for AttendanceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hadir" => Ok(AttendanceStatus::Present),
            "Tidak Hadir" => Ok(AttendanceStatus::Absent),
            "Izin" => Ok(AttendanceStatus::Excused),
            "Sakit" => Ok(AttendanceStatus::Sick),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

use std::fmt;

/// Result type for rollcall-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer.
///
/// The variants classify failures by the boundary they cross: `Open` is
/// fatal at startup, `Read` and `Write` are recoverable at their call
/// sites.
#[derive(Debug)]
pub enum Error {
    /// Database file could not be opened or its schema initialized
    Open(rusqlite::Error),

    /// Listing query failed
    Read(rusqlite::Error),

    /// Insert failed
    Write(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Open(err) => write!(f, "Failed to open attendance database: {}", err),
            Error::Read(err) => {
                let msg = err.to_string();
                if msg.contains("no such column") || msg.contains("no such table") {
                    write!(f, "Database schema mismatch: {}", msg)
                } else {
                    write!(f, "Failed to read attendance records: {}", err)
                }
            }
            Error::Write(err) => write!(f, "Failed to save attendance record: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open(err) | Error::Read(err) | Error::Write(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_mismatch_read_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such column: attendance_status".to_string()),
        );
        let msg = Error::Read(sqlite_err).to_string();
        assert!(msg.contains("Database schema mismatch"));
    }

    #[test]
    fn test_write_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(8),
            Some("attempt to write a readonly database".to_string()),
        );
        let msg = Error::Write(sqlite_err).to_string();
        assert!(msg.starts_with("Failed to save attendance record:"));
    }
}

use crate::error::{Error, Result};
use crate::schema;
use chrono::{DateTime, Utc};
use rollcall_types::{AttendanceRecord, AttendanceStatus, NewRecord, RecordId};
use rusqlite::types::Type;
use rusqlite::{Connection, params};
use std::path::Path;

/// Handle to the attendance database. Owned by the application shell and
/// borrowed by everything that reads or writes records.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(Error::Open)?;
        schema::init_schema(&conn).map_err(Error::Open)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(Error::Open)?;
        schema::init_schema(&conn).map_err(Error::Open)?;
        Ok(Self { conn })
    }

    /// Append one attendance entry. Returns the store-assigned id.
    pub fn append(&self, record: &NewRecord) -> Result<RecordId> {
        self.conn
            .execute(
                r#"
                INSERT INTO attendance
                    (student_name, student_nim, student_faculty, attendance_status, timestamp)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    &record.student_name,
                    &record.student_nim,
                    &record.student_faculty,
                    record.status.label(),
                    record.timestamp.to_rfc3339(),
                ],
            )
            .map_err(Error::Write)?;

        Ok(RecordId(self.conn.last_insert_rowid()))
    }

    /// The most recent entries, newest first, at most `limit` of them.
    /// Re-queried fresh on every call; equal timestamps fall back to
    /// reverse insertion order.
    pub fn list_recent(&self, limit: usize) -> Result<Vec<AttendanceRecord>> {
        let mut stmt = self
            .conn
            .prepare(
                r#"
                SELECT id, student_name, student_nim, student_faculty,
                       attendance_status, timestamp
                FROM attendance
                ORDER BY timestamp DESC, id DESC
                LIMIT ?1
                "#,
            )
            .map_err(Error::Read)?;

        let records = stmt
            .query_map([limit as i64], |row| {
                let status_text: String = row.get(4)?;
                let status: AttendanceStatus = status_text.parse().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
                })?;

                let ts_text: String = row.get(5)?;
                let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(&ts_text)
                    .map(|ts| ts.with_timezone(&Utc))
                    .map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
                    })?;

                Ok(AttendanceRecord {
                    id: RecordId(row.get(0)?),
                    student_name: row.get(1)?,
                    student_nim: row.get(2)?,
                    student_faculty: row.get(3)?,
                    status,
                    timestamp,
                })
            })
            .map_err(Error::Read)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Read)?;

        Ok(records)
    }

    /// Total number of persisted entries.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))
            .map_err(Error::Read)?;

        Ok(count as usize)
    }
}

use rollcall_store::Database;
use rollcall_types::{AttendanceRecord, format_local_timestamp};

/// How many entries the roster shows. Older entries stay in the store but
/// are never listed.
pub const RECENT_LIMIT: usize = 50;

/// Alternating-row classification, by zero-based position in the roster.
/// Presentation contrast only; carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

/// One display row, ready for rendering. Pure data; the UI layer decides
/// colors and layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub headline: String,
    pub faculty: String,
    pub status: String,
    pub timestamp: String,
    pub stripe: Stripe,
}

impl RosterRow {
    fn from_record(index: usize, record: &AttendanceRecord) -> Self {
        Self {
            headline: format!("{} (NIM: {})", record.student_name, record.student_nim),
            faculty: format!("Fakultas: {}", record.student_faculty),
            status: format!("Status: {}", record.status),
            timestamp: format!("Waktu: {}", format_local_timestamp(record.timestamp)),
            stripe: if index % 2 == 0 { Stripe::Even } else { Stripe::Odd },
        }
    }
}

/// The recent-entries list. Rebuilt in full from the store on every
/// refresh; keeps showing the previous rows when a refresh fails.
#[derive(Debug, Default)]
pub struct Roster {
    rows: Vec<RosterRow>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RosterRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Re-query the store and rebuild every row, newest first.
    pub fn refresh(&mut self, db: &Database) -> rollcall_store::Result<()> {
        let records = db.list_recent(RECENT_LIMIT)?;
        self.rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| RosterRow::from_record(index, record))
            .collect();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rollcall_types::{AttendanceStatus, NewRecord};

    fn submit(db: &Database, name: &str, second: u32) {
        db.append(&NewRecord {
            student_name: name.to_string(),
            student_nim: "12345".to_string(),
            student_faculty: "Teknik".to_string(),
            status: AttendanceStatus::Present,
            timestamp: Utc.with_ymd_and_hms(2026, 8, 26, 10, 0, second).unwrap(),
        })
        .unwrap();
    }

    #[test]
    fn test_rows_preserve_store_order() {
        let db = Database::open_in_memory().unwrap();
        submit(&db, "Budi", 0);
        submit(&db, "Siti", 1);

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();

        let rows = roster.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].headline, "Siti (NIM: 12345)");
        assert_eq!(rows[1].headline, "Budi (NIM: 12345)");
    }

    #[test]
    fn test_row_display_lines() {
        let db = Database::open_in_memory().unwrap();
        submit(&db, "Budi", 0);

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();

        let row = &roster.rows()[0];
        assert_eq!(row.headline, "Budi (NIM: 12345)");
        assert_eq!(row.faculty, "Fakultas: Teknik");
        assert_eq!(row.status, "Status: Hadir");
        assert!(row.timestamp.starts_with("Waktu: 2026-08-2"));
    }

    #[test]
    fn test_stripes_alternate() {
        let db = Database::open_in_memory().unwrap();
        for i in 0..5 {
            submit(&db, &format!("student-{}", i), i);
        }

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();

        for (index, row) in roster.rows().iter().enumerate() {
            let expected = if index % 2 == 0 { Stripe::Even } else { Stripe::Odd };
            assert_eq!(row.stripe, expected);
        }
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let db = Database::open_in_memory().unwrap();
        for i in 0..3 {
            submit(&db, &format!("student-{}", i), i);
        }

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();
        let first = roster.rows().to_vec();

        roster.refresh(&db).unwrap();
        assert_eq!(roster.rows(), &first[..]);
    }

    #[test]
    fn test_failed_refresh_keeps_previous_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let db_path = dir.path().join("attendance.sqlite");
        let db = Database::open(&db_path).unwrap();
        submit(&db, "Budi", 0);

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();
        assert_eq!(roster.rows().len(), 1);

        // Break the store underneath the open handle.
        let raw = rusqlite::Connection::open(&db_path).unwrap();
        raw.execute_batch("DROP TABLE attendance").unwrap();

        let err = roster.refresh(&db).unwrap_err();
        assert!(matches!(err, rollcall_store::Error::Read(_)));
        assert!(err.to_string().contains("schema mismatch"));

        // The previous rows stay visible until a refresh succeeds.
        assert_eq!(roster.rows().len(), 1);
        assert_eq!(roster.rows()[0].headline, "Budi (NIM: 12345)");
    }

    #[test]
    fn test_refresh_caps_at_limit() {
        let db = Database::open_in_memory().unwrap();
        for i in 0..60 {
            submit(&db, &format!("student-{}", i), i);
        }

        let mut roster = Roster::new();
        roster.refresh(&db).unwrap();

        assert_eq!(roster.rows().len(), RECENT_LIMIT);
        assert_eq!(roster.rows()[0].headline, "student-59 (NIM: 12345)");
    }
}

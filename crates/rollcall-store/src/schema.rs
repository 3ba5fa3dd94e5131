use rusqlite::Connection;

// Schema version (increment when changing table definitions)
pub const SCHEMA_VERSION: i32 = 1;

// The attendance log is append-only, so a version mismatch has nothing to
// migrate in place: drop and recreate. When the stored version already
// matches, init performs no writes at all, so a read-only database file
// still opens for listing.

pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version == SCHEMA_VERSION {
        return Ok(());
    }

    drop_all_tables(conn)?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_name TEXT NOT NULL,
            student_nim TEXT NOT NULL,
            student_faculty TEXT NOT NULL,
            attendance_status TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_ts ON attendance(timestamp DESC);
        "#,
    )?;

    conn.execute(&format!("PRAGMA user_version = {}", SCHEMA_VERSION), [])?;

    Ok(())
}

fn drop_all_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("DROP TABLE IF EXISTS attendance;")?;
    Ok(())
}

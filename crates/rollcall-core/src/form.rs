use chrono::Utc;
use rollcall_store::Database;
use rollcall_types::{AttendanceStatus, NewRecord, RecordId};

/// Which form field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Nim,
    Faculty,
    Status,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Nim,
            Self::Nim => Self::Faculty,
            Self::Faculty => Self::Status,
            Self::Status => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Status,
            Self::Nim => Self::Name,
            Self::Faculty => Self::Nim,
            Self::Status => Self::Faculty,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nama Mahasiswa",
            Self::Nim => "NIM",
            Self::Faculty => "Fakultas",
            Self::Status => "Kehadiran",
        }
    }
}

/// Transient entry state for the attendance form.
///
/// Owns the unsaved field values; persisted records belong to the store.
/// The submit gate is recomputed after every edit and never cached across
/// submissions. Input is stored as typed, without trimming, so
/// whitespace-only fields count as filled.
#[derive(Debug, Default)]
pub struct AttendanceForm {
    name: String,
    nim: String,
    faculty: String,
    status: AttendanceStatus,
    can_submit: bool,
}

impl AttendanceForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nim(&self) -> &str {
        &self.nim
    }

    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    /// Current text of one of the three free-text fields.
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => Some(&self.name),
            FormField::Nim => Some(&self.nim),
            FormField::Faculty => Some(&self.faculty),
            FormField::Status => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn insert_char(&mut self, field: FormField, c: char) {
        if let Some(buffer) = self.buffer_mut(field) {
            buffer.push(c);
        }
        self.on_field_changed();
    }

    pub fn backspace(&mut self, field: FormField) {
        if let Some(buffer) = self.buffer_mut(field) {
            buffer.pop();
        }
        self.on_field_changed();
    }

    pub fn set_text(&mut self, field: FormField, value: &str) {
        if let Some(buffer) = self.buffer_mut(field) {
            buffer.clear();
            buffer.push_str(value);
        }
        self.on_field_changed();
    }

    pub fn select_next_status(&mut self) {
        self.status = self.status.next();
        self.on_field_changed();
    }

    pub fn select_prev_status(&mut self) {
        self.status = self.status.prev();
        self.on_field_changed();
    }

    /// Recompute the submit gate. Idempotent; runs after every edit.
    ///
    /// The status conjunct of the gate is carried by the type: an
    /// `AttendanceStatus` is always one of the four selectable values.
    pub fn on_field_changed(&mut self) {
        self.can_submit =
            !self.name.is_empty() && !self.nim.is_empty() && !self.faculty.is_empty();
    }

    /// Submit the current entry.
    ///
    /// Returns `Ok(None)` without touching the store when the gate is
    /// closed (the submit control is inert then). On a successful append
    /// all fields reset to their defaults and the gate closes. On a write
    /// error the field values are left exactly as entered so the user can
    /// retry.
    pub fn on_submit_pressed(
        &mut self,
        db: &Database,
    ) -> rollcall_store::Result<Option<RecordId>> {
        if !self.can_submit {
            return Ok(None);
        }

        let record = NewRecord {
            student_name: self.name.clone(),
            student_nim: self.nim.clone(),
            student_faculty: self.faculty.clone(),
            status: self.status,
            timestamp: Utc::now(),
        };

        let id = db.append(&record)?;

        self.name.clear();
        self.nim.clear();
        self.faculty.clear();
        self.status = AttendanceStatus::default();
        self.can_submit = false;

        Ok(Some(id))
    }

    fn buffer_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Name => Some(&mut self.name),
            FormField::Nim => Some(&mut self.nim),
            FormField::Faculty => Some(&mut self.faculty),
            FormField::Status => None,
        }
    }
}

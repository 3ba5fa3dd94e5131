use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rollcall_core::{AttendanceForm, FormField, Roster};
use rollcall_store::Database;

/// Whole-application state: the store handle, the entry form, the roster
/// and the focus/scroll bookkeeping for the single screen.
///
/// Key handling is separate from terminal IO so tests can drive it
/// without a terminal.
pub struct App {
    db: Database,
    form: AttendanceForm,
    roster: Roster,
    focus: FormField,
    scroll: u16,
    diagnostics: Vec<String>,
    should_quit: bool,
}

impl App {
    /// Build the screen state over an open store. The roster is filled
    /// once here, unconditionally; a failed initial read leaves it empty
    /// and is reported like any other recoverable error.
    pub fn new(db: Database) -> Self {
        let mut app = Self {
            db,
            form: AttendanceForm::new(),
            roster: Roster::new(),
            focus: FormField::Name,
            scroll: 0,
            diagnostics: Vec::new(),
            should_quit: false,
        };
        app.refresh_roster();
        app
    }

    pub fn form(&self) -> &AttendanceForm {
        &self.form
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Drain the recoverable-error log for reporting once the terminal
    /// is back in cooked mode.
    pub fn take_diagnostics(&mut self) -> Vec<String> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.on_submit_pressed(),
            KeyCode::Backspace => self.form.backspace(self.focus),
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(4).min(self.max_scroll());
            }
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(4),
            KeyCode::Left if self.focus == FormField::Status => self.form.select_prev_status(),
            KeyCode::Right if self.focus == FormField::Status => self.form.select_next_status(),
            KeyCode::Char(c) => self.on_char(c),
            _ => {}
        }
    }

    fn on_char(&mut self, c: char) {
        if self.focus == FormField::Status {
            match c {
                ' ' => self.form.select_next_status(),
                'q' => self.should_quit = true,
                _ => {}
            }
        } else {
            self.form.insert_char(self.focus, c);
        }
    }

    /// The submit control is inert while the gate is closed; the form
    /// double-checks and does nothing in that case.
    fn on_submit_pressed(&mut self) {
        match self.form.on_submit_pressed(&self.db) {
            Ok(Some(_)) => {
                self.scroll = 0;
                self.focus = FormField::Name;
                self.refresh_roster();
            }
            Ok(None) => {}
            Err(err) => self.diagnostics.push(err.to_string()),
        }
    }

    /// Last scrollable line of the roster: four rendered lines per row.
    fn max_scroll(&self) -> u16 {
        (self.roster.rows().len() * 4).saturating_sub(1) as u16
    }

    fn refresh_roster(&mut self) {
        if let Err(err) = self.roster.refresh(&self.db) {
            self.diagnostics.push(err.to_string());
        }
    }
}

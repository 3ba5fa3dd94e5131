mod form;
mod roster;

pub use form::FormView;
pub use roster::RosterView;

use crate::App;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Single-screen layout: the entry form on top, the roster below.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks =
        Layout::vertical([Constraint::Length(8), Constraint::Min(0)]).split(frame.area());

    frame.render_widget(FormView::new(app.form(), app.focus()), chunks[0]);
    frame.render_widget(RosterView::new(app.roster(), app.scroll()), chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use rollcall_store::Database;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_draw_empty_screen() {
        let app = App::new(Database::open_in_memory().unwrap());
        let screen = render(&app);
        assert!(screen.contains("Absensi Mahasiswa"));
        assert!(screen.contains("Nama Mahasiswa"));
        assert!(screen.contains("Belum ada data absensi."));
    }

    #[test]
    fn test_draw_shows_submitted_entry() {
        let mut app = App::new(Database::open_in_memory().unwrap());
        for c in "Budi".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in "12345".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        for c in "Teknik".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = render(&app);
        assert!(screen.contains("Budi (NIM: 12345)"));
        assert!(screen.contains("Fakultas: Teknik"));
        assert!(screen.contains("Status: Hadir"));
    }
}

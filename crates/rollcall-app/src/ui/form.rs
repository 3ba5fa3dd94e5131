use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rollcall_core::{AttendanceForm, FormField};

/// Entry form wrapper: three text inputs, the status selection and the
/// submit control, with the focused field highlighted.
pub struct FormView<'a> {
    form: &'a AttendanceForm,
    focus: FormField,
}

impl<'a> FormView<'a> {
    pub fn new(form: &'a AttendanceForm, focus: FormField) -> Self {
        Self { form, focus }
    }

    fn text_field_line(&self, field: FormField) -> Line<'a> {
        let focused = self.focus == field;
        let value = self.form.text(field).unwrap_or_default();

        let mut spans = vec![
            Span::styled(format!("{:<16}", field.label()), label_style(focused)),
            Span::raw(value.to_string()),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
        }
        Line::from(spans)
    }

    fn status_line(&self) -> Line<'a> {
        let focused = self.focus == FormField::Status;
        Line::from(vec![
            Span::styled(
                format!("{:<16}", FormField::Status.label()),
                label_style(focused),
            ),
            Span::styled(
                format!("< {} >", self.form.status()),
                if focused {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                },
            ),
        ])
    }

    fn submit_line(&self) -> Line<'a> {
        // Enabled and disabled states look different on purpose; the
        // control is inert while the gate is closed.
        let style = if self.form.can_submit() {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        Line::from(Span::styled("[ Absensi ]", style))
    }
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}

impl<'a> Widget for FormView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Absensi Mahasiswa")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            self.text_field_line(FormField::Name),
            self.text_field_line(FormField::Nim),
            self.text_field_line(FormField::Faculty),
            self.status_line(),
            self.submit_line(),
            Line::from(Span::styled(
                "Tab: pindah kolom   Enter: simpan   Esc: keluar",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}

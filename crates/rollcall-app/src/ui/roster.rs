use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use rollcall_core::{RECENT_LIMIT, Roster, Stripe};

/// Scrollable read-only list of the most recent entries, newest first,
/// with alternating row backgrounds.
pub struct RosterView<'a> {
    roster: &'a Roster,
    scroll: u16,
}

impl<'a> RosterView<'a> {
    pub fn new(roster: &'a Roster, scroll: u16) -> Self {
        Self { roster, scroll }
    }
}

impl<'a> Widget for RosterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("Riwayat Absensi ({} terbaru)", RECENT_LIMIT))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.roster.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "Belum ada data absensi.",
                Style::default().add_modifier(Modifier::DIM),
            )))
            .render(inner, buf);
            return;
        }

        let mut lines = Vec::with_capacity(self.roster.rows().len() * 4);
        for row in self.roster.rows() {
            let stripe_style = match row.stripe {
                Stripe::Even => Style::default(),
                Stripe::Odd => Style::default().bg(Color::DarkGray),
            };

            lines.push(
                Line::from(Span::styled(
                    row.headline.clone(),
                    stripe_style.add_modifier(Modifier::BOLD),
                ))
                .style(stripe_style),
            );
            lines.push(Line::from(Span::raw(row.faculty.clone())).style(stripe_style));
            lines.push(Line::from(Span::raw(row.status.clone())).style(stripe_style));
            lines.push(
                Line::from(Span::styled(
                    row.timestamp.clone(),
                    stripe_style.add_modifier(Modifier::DIM),
                ))
                .style(stripe_style),
            );
        }

        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .render(inner, buf);
    }
}

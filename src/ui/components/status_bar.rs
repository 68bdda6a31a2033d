//! Status bar component

use crate::ui::core::{Focus, RenderContext};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One-line key hint bar at the bottom of the screen
pub struct StatusBar;

impl StatusBar {
    pub fn render(f: &mut Frame, area: Rect, ctx: &RenderContext, focus: Focus) {
        let palette = &ctx.palette;
        let hints = match focus {
            Focus::Sidebar => "j/k: move • Enter: open • h/l: fold • Tab: orders • t: theme • ?: help • q: quit",
            Focus::Orders => "j/k: row • Enter: actions • Tab: sidebar • PgUp/PgDn: scroll • ?: help • q: quit",
        };
        let focus_label = match focus {
            Focus::Sidebar => " SIDEBAR ",
            Focus::Orders => " ORDERS ",
        };

        let line = Line::from(vec![
            Span::styled(focus_label, Style::default().fg(palette.primary_fg).bg(palette.primary)),
            Span::raw(" "),
            Span::styled(hints, Style::default().fg(palette.muted)),
        ]);

        let status_bar = Paragraph::new(line)
            .alignment(Alignment::Left)
            .style(Style::default().bg(palette.sidebar_bg));

        f.render_widget(status_bar, area);
    }
}

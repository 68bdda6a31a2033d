//! Vertical scrollbar shared by the sidebar, the dashboard canvas and the
//! dialogs. Arrows follow the icon theme and colors follow the palette.

use crate::ui::core::RenderContext;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

#[derive(Default)]
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scroll position. `scrollable` is the number of positions
    /// the view can take (content minus viewport), `viewport` the visible rows.
    pub fn update_state(&mut self, scrollable: usize, position: usize, viewport: usize) {
        self.state = self
            .state
            .content_length(scrollable)
            .viewport_content_length(viewport)
            .position(position.min(scrollable));
    }

    /// Reserve the rightmost column of `rect` for a scrollbar when `rows` do
    /// not fit. `inset` rows at the top and bottom (borders) are left alone.
    #[must_use]
    pub fn split(rect: Rect, rows: usize, inset: u16) -> (Rect, Option<Rect>) {
        let visible = rect.height.saturating_sub(inset * 2);
        if rows <= visible as usize {
            return (rect, None);
        }

        let content = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let bar = Rect::new(rect.right().saturating_sub(1), rect.y + inset, 1, visible);
        (content, Some(bar))
    }

    /// Draw the bar into `area`; nothing happens without an area
    pub fn render(&mut self, f: &mut Frame, area: Option<Rect>, ctx: &RenderContext) {
        let Some(area) = area else {
            return;
        };

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(ctx.icons.arrow_up()))
            .end_symbol(Some(ctx.icons.arrow_down()))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(ctx.palette.border))
            .thumb_style(Style::default().fg(ctx.palette.muted));

        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}

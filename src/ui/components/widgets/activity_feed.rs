use super::card::card;
use crate::constants::{ACTIVITY_DESCRIPTION, ACTIVITY_TITLE};
use crate::models::ActivityEvent;
use crate::ui::core::RenderContext;
use crate::utils::text::truncate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Lines per event plus a blank separator
const ROW_HEIGHT: u16 = 3;

#[must_use]
pub fn height(count: usize) -> u16 {
    4 + count as u16 * ROW_HEIGHT
}

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, events: &[ActivityEvent]) {
    let palette = &ctx.palette;
    let body = card(buf, area, ctx, ACTIVITY_TITLE, Some(ACTIVITY_DESCRIPTION));
    let bullet = ctx.icons.bullet();
    let text_width = (body.width as usize).saturating_sub(5);

    let mut lines = Vec::with_capacity(events.len() * ROW_HEIGHT as usize);
    for event in events {
        let icon = Span::styled(
            format!(" {} ", ctx.icons.glyph(event.category.icon())),
            Style::default().fg(palette.secondary_fg).bg(palette.secondary),
        );
        lines.push(Line::from(vec![
            icon,
            Span::raw(" "),
            Span::styled(
                truncate(event.description, text_width),
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("     "),
            Span::styled(
                truncate(&format!("by {} {} {}", event.actor, bullet, event.time), text_width),
                Style::default().fg(palette.muted),
            ),
        ]));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines).render(body, buf);
}

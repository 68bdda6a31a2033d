use crate::models::{ChangeType, Trend};
use crate::ui::core::RenderContext;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Paragraph, Widget},
};

/// Draw a rounded card with a bold title and an optional muted description
/// line. Returns the area left for the card body.
pub fn card(buf: &mut Buffer, area: Rect, ctx: &RenderContext, title: &str, description: Option<&str>) -> Rect {
    let palette = &ctx.palette;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);

    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    match description {
        Some(text) if inner.height > 0 => {
            Paragraph::new(Span::styled(text.to_string(), Style::default().fg(palette.muted)))
                .render(Rect::new(inner.x, inner.y, inner.width, 1), buf);
            // Description plus a blank line
            let used = 2.min(inner.height);
            Rect::new(inner.x, inner.y + used, inner.width, inner.height - used)
        }
        _ => inner,
    }
}

/// `↑ +20.1% from last month`: arrow direction follows `trend`, the arrow and
/// the change share the affirmative or warning color of `change_type`.
#[must_use]
pub fn change_indicator(
    ctx: &RenderContext,
    trend: Trend,
    change_type: ChangeType,
    change: &str,
    description: &str,
) -> Line<'static> {
    let color = match change_type {
        ChangeType::Positive => ctx.palette.positive,
        ChangeType::Negative => ctx.palette.negative,
    };
    let arrow = match trend {
        Trend::Up => ctx.icons.arrow_up(),
        Trend::Down => ctx.icons.arrow_down(),
    };

    Line::from(vec![
        Span::styled(format!("{arrow} "), Style::default().fg(color)),
        Span::styled(change.to_string(), Style::default().fg(color)),
        Span::styled(format!(" {description}"), Style::default().fg(ctx.palette.muted)),
    ])
}

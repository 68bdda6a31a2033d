use super::card::{card, change_indicator};
use crate::constants::BREAKPOINT_MEDIUM;
use crate::models::SecondaryMetric;
use crate::ui::core::RenderContext;
use crate::ui::layout::LayoutManager;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

/// Borders, value, change line and gauge
pub const METRIC_CARD_HEIGHT: u16 = 5;

fn columns(width: u16, count: usize) -> usize {
    if width >= BREAKPOINT_MEDIUM {
        count.max(1)
    } else {
        1
    }
}

#[must_use]
pub fn height(count: usize, width: u16) -> u16 {
    count.div_ceil(columns(width, count)) as u16 * METRIC_CARD_HEIGHT
}

/// Secondary metric cards, side by side on wide screens
pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, metrics: &[SecondaryMetric]) {
    let cells = LayoutManager::grid(area, metrics.len(), columns(area.width, metrics.len()), METRIC_CARD_HEIGHT);

    for (metric, cell) in metrics.iter().zip(cells) {
        let palette = &ctx.palette;
        let body = card(buf, cell, ctx, metric.label, None);

        let lines = vec![
            Line::from(Span::styled(
                metric.value,
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            )),
            change_indicator(ctx, metric.trend, metric.change_type, metric.change, metric.description),
        ];
        Paragraph::new(lines).render(body, buf);

        if body.height > 2 {
            LineGauge::default()
                .filled_style(Style::default().fg(palette.primary))
                .unfilled_style(Style::default().fg(palette.secondary))
                .line_set(symbols::line::THICK)
                .label("")
                .ratio(f64::from(metric.progress.min(100)) / 100.0)
                .render(Rect::new(body.x, body.y + 2, body.width, 1), buf);
        }
    }
}

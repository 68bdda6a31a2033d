use super::card::change_indicator;
use crate::models::KpiMetric;
use crate::ui::core::RenderContext;
use crate::ui::layout::LayoutManager;
use crate::utils::text::gap_between;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Paragraph, Widget},
};

/// Height of one KPI card including borders
pub const KPI_CARD_HEIGHT: u16 = 5;

/// Lines needed for `count` cards at `width`
#[must_use]
pub fn height(count: usize, width: u16) -> u16 {
    let rows = count.div_ceil(LayoutManager::kpi_columns(width));
    rows as u16 * KPI_CARD_HEIGHT
}

/// One card per metric, in input order, wrapped into a responsive grid
pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, metrics: &[KpiMetric]) {
    let columns = LayoutManager::kpi_columns(area.width);
    let cells = LayoutManager::grid(area, metrics.len(), columns, KPI_CARD_HEIGHT);

    for (metric, cell) in metrics.iter().zip(cells) {
        render_card(buf, cell, ctx, metric);
    }
}

fn render_card(buf: &mut Buffer, area: Rect, ctx: &RenderContext, metric: &KpiMetric) {
    let palette = &ctx.palette;
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    block.render(area, buf);
    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);

    let label = Line::from(Span::styled(metric.label, Style::default().fg(palette.foreground)));
    let icon = Line::from(Span::styled(ctx.icons.glyph(metric.icon), Style::default().fg(palette.muted)));
    let gap = gap_between(&label, &icon, inner.width as usize).max(1);
    let mut title = label.spans;
    title.push(Span::raw(" ".repeat(gap)));
    title.extend(icon.spans);

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            metric.value,
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        )),
        change_indicator(
            ctx,
            metric.change_type.trend(),
            metric.change_type,
            metric.change,
            metric.description,
        ),
    ];

    Paragraph::new(lines).render(inner, buf);
}

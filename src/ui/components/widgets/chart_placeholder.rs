use super::card::card;
use crate::constants::{CHART_DESCRIPTION, CHART_PLACEHOLDER, CHART_PLACEHOLDER_HINT, CHART_TITLE};
use crate::icons::IconName;
use crate::ui::core::RenderContext;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph, Widget},
};

/// Revenue chart card. No chart is drawn yet, only a shaded placeholder.
pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
    let palette = &ctx.palette;
    let body = card(buf, area, ctx, CHART_TITLE, Some(CHART_DESCRIPTION));

    Block::default()
        .style(Style::default().bg(palette.secondary))
        .render(body, buf);

    let [_, text, _] = Layout::vertical([Constraint::Fill(1), Constraint::Length(3), Constraint::Fill(1)]).areas(body);
    let muted = Style::default().fg(palette.muted).bg(palette.secondary);
    let lines = vec![
        Line::styled(ctx.icons.glyph(IconName::TrendingUp), muted),
        Line::styled(CHART_PLACEHOLDER, muted),
        Line::styled(CHART_PLACEHOLDER_HINT, muted),
    ];
    Paragraph::new(lines).alignment(Alignment::Center).render(text, buf);
}

use super::card::card;
use crate::constants::{PRODUCTS_DESCRIPTION, PRODUCTS_TITLE};
use crate::models::ProductStat;
use crate::ui::core::RenderContext;
use crate::utils::text::truncate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Widget},
};

/// Lines per product: name, sales line, gauge
const ROW_HEIGHT: u16 = 3;

/// Card height for `count` products
#[must_use]
pub fn height(count: usize) -> u16 {
    // borders + description + blank line
    4 + count as u16 * ROW_HEIGHT
}

pub fn render(buf: &mut Buffer, area: Rect, ctx: &RenderContext, products: &[ProductStat]) {
    let palette = &ctx.palette;
    let body = card(buf, area, ctx, PRODUCTS_TITLE, Some(PRODUCTS_DESCRIPTION));
    let bullet = ctx.icons.bullet();

    for (index, product) in products.iter().enumerate() {
        let y = body.y + index as u16 * ROW_HEIGHT;
        if y + ROW_HEIGHT > body.bottom() {
            break;
        }

        let lines = vec![
            Line::from(Span::styled(
                truncate(product.name, body.width as usize),
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("{} sales {} {}", product.sales, bullet, product.revenue),
                Style::default().fg(palette.muted),
            )),
        ];
        Paragraph::new(lines).render(Rect::new(body.x, y, body.width, 2), buf);

        LineGauge::default()
            .filled_style(Style::default().fg(palette.primary))
            .unfilled_style(Style::default().fg(palette.secondary))
            .line_set(symbols::line::THICK)
            .label("")
            .ratio(f64::from(product.progress.min(100)) / 100.0)
            .render(Rect::new(body.x, y + 2, body.width, 1), buf);
    }
}

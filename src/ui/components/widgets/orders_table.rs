use super::card::card;
use crate::constants::{ORDERS_DESCRIPTION, ORDERS_TITLE};
use crate::icons::IconName;
use crate::models::OrderRecord;
use crate::ui::components::badge::create_status_badge;
use crate::ui::core::RenderContext;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

/// Each order shows the customer name above the email
const ROW_HEIGHT: u16 = 2;
/// Narrower tables drop the amount column
const AMOUNT_MIN_WIDTH: u16 = 48;
/// Narrower tables drop the status column
const STATUS_MIN_WIDTH: u16 = 36;

/// Card height for `count` orders
#[must_use]
pub fn height(count: usize) -> u16 {
    // borders + description + blank line + header
    5 + count as u16 * ROW_HEIGHT
}

/// Recent orders. `state` carries the row cursor; the highlight is only drawn
/// while the table has focus.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    ctx: &RenderContext,
    orders: &[OrderRecord],
    state: &mut TableState,
    focused: bool,
) {
    let palette = &ctx.palette;
    let body = card(buf, area, ctx, ORDERS_TITLE, Some(ORDERS_DESCRIPTION));

    // "View All" sits on the description line, right-aligned
    let view_all = format!("View All {} (v)", ctx.icons.arrow_up());
    Paragraph::new(Span::styled(view_all, Style::default().fg(palette.accent)))
        .alignment(Alignment::Right)
        .render(Rect::new(body.x, body.y.saturating_sub(2), body.width, 1), buf);

    let show_status = body.width >= STATUS_MIN_WIDTH;
    let show_amount = body.width >= AMOUNT_MIN_WIDTH;
    let header_style = Style::default().fg(palette.muted).add_modifier(Modifier::BOLD);

    let mut header = vec![Cell::from(""), Cell::from("Customer")];
    let mut widths = vec![Constraint::Length(3), Constraint::Min(12)];
    if show_status {
        header.push(Cell::from("Status"));
        widths.push(Constraint::Length(12));
    }
    if show_amount {
        header.push(Cell::from("Amount"));
        widths.push(Constraint::Length(10));
    }
    header.push(Cell::from(Line::from("Actions").alignment(Alignment::Right)));
    widths.push(Constraint::Length(7));

    let more = ctx.icons.glyph(IconName::MoreHorizontal);
    let rows: Vec<Row> = orders
        .iter()
        .map(|order| {
            let customer = Text::from(vec![
                Line::styled(order.customer, Style::default().fg(palette.foreground)),
                Line::styled(order.email, Style::default().fg(palette.muted)),
            ]);

            let mut cells = vec![
                Cell::from(Span::styled(
                    crate::utils::text::initials(order.customer),
                    Style::default()
                        .fg(palette.secondary_fg)
                        .bg(palette.secondary)
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(customer),
            ];
            if show_status {
                cells.push(Cell::from(create_status_badge(order.status, palette)));
            }
            if show_amount {
                cells.push(Cell::from(Span::styled(
                    order.amount,
                    Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
                )));
            }
            cells.push(Cell::from(
                Line::styled(more, Style::default().fg(palette.muted)).alignment(Alignment::Right),
            ));

            Row::new(cells).height(ROW_HEIGHT)
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(palette.selection_bg).fg(palette.selection_fg)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(Row::new(header).style(header_style))
        .row_highlight_style(highlight);

    StatefulWidget::render(table, body, buf, state);
}

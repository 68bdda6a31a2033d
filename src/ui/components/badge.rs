use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::models::OrderStatus;
use crate::theme::Palette;

/// Visual weight of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Solid primary fill
    Default,
    /// Muted fill
    Secondary,
    /// Border-only look: no fill, bracketed text
    Outline,
}

/// Badge variant for an order status. Unrecognized statuses fall back to
/// [`BadgeVariant::Outline`].
#[must_use]
pub fn badge_variant_for(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Completed => BadgeVariant::Default,
        OrderStatus::Processing => BadgeVariant::Secondary,
        OrderStatus::Pending | OrderStatus::Other(_) => BadgeVariant::Outline,
    }
}

#[must_use]
pub fn badge_style(variant: BadgeVariant, palette: &Palette) -> Style {
    match variant {
        BadgeVariant::Default => Style::default()
            .fg(palette.primary_fg)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
        BadgeVariant::Secondary => Style::default().fg(palette.secondary_fg).bg(palette.secondary),
        BadgeVariant::Outline => Style::default().fg(palette.foreground),
    }
}

/// Render `text` as a badge span
#[must_use]
pub fn create_badge(text: &str, variant: BadgeVariant, palette: &Palette) -> Span<'static> {
    let content = match variant {
        BadgeVariant::Outline => format!("[{text}]"),
        _ => format!(" {text} "),
    };
    Span::styled(content, badge_style(variant, palette))
}

/// Status badge for an order
#[must_use]
pub fn create_status_badge(status: OrderStatus, palette: &Palette) -> Span<'static> {
    create_badge(status.label(), badge_variant_for(status), palette)
}

//! Sidebar row abstraction.
//!
//! The sidebar is rendered from a flat list of [`SidebarItemType`] rows built
//! from the navigation tree, so section folding only changes which rows exist.

use crate::constants::{BRAND_NAME, BRAND_VERSION};
use crate::icons::IconName;
use crate::models::{NavItem, UserProfile};
use crate::ui::components::badge::{create_badge, BadgeVariant};
use crate::ui::core::{NavTarget, RenderContext};
use crate::utils::text::{gap_between, truncate};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Types of rows that can appear in the sidebar
#[derive(Clone, Debug)]
pub enum SidebarItemType {
    /// Brand header (logo, product name, version)
    Brand,
    /// Group caption such as "Main Navigation"
    GroupLabel(&'static str),
    /// Top-level item without children
    Link(&'static NavItem),
    /// Top-level item with children
    Section { item: &'static NavItem, is_expanded: bool },
    /// Child of an expanded section
    SubLink {
        item: &'static NavItem,
        section: &'static str,
        is_last: bool,
    },
    /// Blank separator line
    Spacer,
    /// Current theme, e.g. "System (dark)"
    ThemeIndicator(String),
    /// Signed-in user, opens the account menu
    UserRow(UserProfile),
}

impl SidebarItemType {
    /// Whether `other` is this row in a rebuilt list. Fold state and the
    /// theme label may differ; structural rows never match.
    #[must_use]
    pub fn is_same_row(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Link(a), Self::Link(b)) => a.title == b.title,
            (Self::Section { item: a, .. }, Self::Section { item: b, .. }) => a.title == b.title,
            (
                Self::SubLink { item: a, section: sa, .. },
                Self::SubLink { item: b, section: sb, .. },
            ) => a.title == b.title && sa == sb,
            (Self::ThemeIndicator(_), Self::ThemeIndicator(_)) | (Self::UserRow(_), Self::UserRow(_)) => true,
            _ => false,
        }
    }
}

/// Per-row render flags
#[derive(Debug, Clone, Copy, Default)]
pub struct RowState {
    /// The row is the active navigation target
    pub is_active: bool,
    /// Sidebar is collapsed to icons
    pub icon_only: bool,
}

/// Trait for sidebar rows that can be rendered and navigated
pub trait SidebarItem {
    /// Render the row for a sidebar whose inner width is `width`
    fn render(&self, ctx: &RenderContext, state: RowState, width: usize) -> ListItem<'static>;

    /// Whether the cursor can rest on this row
    fn is_selectable(&self) -> bool;

    /// Navigation target recorded when this row is activated
    fn nav_target(&self) -> Option<NavTarget>;

    /// Title of the section this row toggles
    fn section_title(&self) -> Option<&'static str>;
}

fn icon_span(ctx: &RenderContext, icon: Option<IconName>, style: Style) -> Span<'static> {
    match icon {
        Some(name) => Span::styled(format!("{} ", ctx.icons.glyph(name)), style),
        None => Span::raw(""),
    }
}

/// Left part of the row, plus an optional right-aligned tail
fn compose(left: Vec<Span<'static>>, right: Vec<Span<'static>>, width: usize) -> Line<'static> {
    let left = Line::from(left);
    if right.is_empty() {
        return left;
    }
    let right = Line::from(right);
    let gap = gap_between(&left, &right, width).max(1);

    let mut spans = left.spans;
    spans.push(Span::raw(" ".repeat(gap)));
    spans.extend(right.spans);
    Line::from(spans)
}

impl SidebarItem for SidebarItemType {
    fn render(&self, ctx: &RenderContext, state: RowState, width: usize) -> ListItem<'static> {
        let palette = &ctx.palette;
        let normal = Style::default().fg(palette.foreground);
        let muted = Style::default().fg(palette.muted);
        let active = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
        let row_style = if state.is_active { active } else { normal };

        let line = match self {
            SidebarItemType::Brand => {
                let logo = Span::styled(
                    format!("{} ", ctx.icons.glyph(IconName::Building)),
                    Style::default().fg(palette.primary).add_modifier(Modifier::BOLD),
                );
                if state.icon_only {
                    Line::from(logo)
                } else {
                    Line::from(vec![
                        logo,
                        Span::styled(BRAND_NAME, normal.add_modifier(Modifier::BOLD)),
                        Span::styled(format!(" {BRAND_VERSION}"), muted),
                    ])
                }
            }

            SidebarItemType::GroupLabel(label) => {
                if state.icon_only {
                    Line::from("")
                } else {
                    Line::from(Span::styled(*label, muted))
                }
            }

            SidebarItemType::Link(item) => {
                let icon = icon_span(ctx, item.icon, row_style);
                if state.icon_only {
                    Line::from(icon)
                } else {
                    let badge = item
                        .badge
                        .map(|text| vec![create_badge(text, BadgeVariant::Secondary, palette)])
                        .unwrap_or_default();
                    compose(vec![icon, Span::styled(item.title, row_style)], badge, width)
                }
            }

            SidebarItemType::Section { item, is_expanded } => {
                let icon = icon_span(ctx, item.icon, row_style);
                if state.icon_only {
                    Line::from(icon)
                } else {
                    let mut right = Vec::new();
                    if let Some(text) = item.badge {
                        right.push(create_badge(text, BadgeVariant::Secondary, palette));
                        right.push(Span::raw(" "));
                    }
                    right.push(Span::styled(ctx.icons.chevron(*is_expanded), muted));
                    compose(vec![icon, Span::styled(item.title, row_style)], right, width)
                }
            }

            SidebarItemType::SubLink { item, is_last, .. } => {
                let prefix = format!("  {} ", ctx.icons.tree_prefix(*is_last));
                let title = truncate(item.title, width.saturating_sub(prefix.chars().count()));
                Line::from(vec![Span::styled(prefix, muted), Span::styled(title, row_style)])
            }

            SidebarItemType::Spacer => Line::from(""),

            SidebarItemType::ThemeIndicator(label) => {
                let icon = Span::styled(format!("{} ", ctx.icons.theme_icon(ctx.theme.resolved())), muted);
                if state.icon_only {
                    Line::from(icon)
                } else {
                    Line::from(vec![icon, Span::styled(format!("Theme: {label}"), muted)])
                }
            }

            SidebarItemType::UserRow(user) => {
                let avatar = Span::styled(
                    format!("{} ", user.initials()),
                    Style::default()
                        .fg(palette.secondary_fg)
                        .bg(palette.secondary)
                        .add_modifier(Modifier::BOLD),
                );
                if state.icon_only {
                    Line::from(avatar)
                } else {
                    let name = truncate(user.name, width.saturating_sub(6));
                    compose(
                        vec![avatar, Span::raw(" "), Span::styled(name, normal)],
                        vec![Span::styled(ctx.icons.glyph(IconName::MoreHorizontal), muted)],
                        width,
                    )
                }
            }
        };

        ListItem::new(line)
    }

    fn is_selectable(&self) -> bool {
        matches!(
            self,
            SidebarItemType::Link(_)
                | SidebarItemType::Section { .. }
                | SidebarItemType::SubLink { .. }
                | SidebarItemType::ThemeIndicator(_)
                | SidebarItemType::UserRow(_)
        )
    }

    fn nav_target(&self) -> Option<NavTarget> {
        match self {
            SidebarItemType::Link(item) => Some(NavTarget::page(item.title)),
            SidebarItemType::SubLink { item, section, .. } => Some(NavTarget::in_section(*section, item.title)),
            _ => None,
        }
    }

    fn section_title(&self) -> Option<&'static str> {
        match self {
            SidebarItemType::Section { item, .. } => Some(item.title),
            SidebarItemType::SubLink { section, .. } => Some(*section),
            _ => None,
        }
    }
}

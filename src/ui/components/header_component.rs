//! Dashboard header: breadcrumbs, search box, action buttons and the theme
//! toggle. Everything except the toggle is a placeholder.

use crate::constants::{
    BREADCRUMB_DEFAULT_PAGE, BREADCRUMB_ROOT, BUTTON_ADD_NEW, BUTTON_EXPORT, BUTTON_FILTER, SEARCH_PLACEHOLDER,
};
use crate::icons::IconName;
use crate::ui::core::{Action, Affordance, Component, MenuKind, NavTarget, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Below this width buttons drop their labels
const COMPACT_WIDTH: u16 = 100;
/// Below this width the search box is hidden
const NARROW_WIDTH: u16 = 70;

/// One clickable header control
struct HeaderButton {
    text: String,
    style: Style,
    action: Action,
}

pub struct HeaderComponent {
    active: Option<NavTarget>,
    hitboxes: Vec<(Rect, Action)>,
}

impl Default for HeaderComponent {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HeaderComponent {
    pub fn new(active: Option<NavTarget>) -> Self {
        Self {
            active,
            hitboxes: Vec::new(),
        }
    }

    /// Breadcrumb trail for the active target. The dashboard home reads as
    /// `Dashboard › Overview`.
    #[must_use]
    pub fn breadcrumbs(active: Option<NavTarget>) -> Vec<&'static str> {
        let mut crumbs = vec![BREADCRUMB_ROOT];
        match active {
            Some(NavTarget { section: None, page }) if page != BREADCRUMB_ROOT => crumbs.push(page),
            Some(NavTarget {
                section: Some(section),
                page,
            }) => {
                crumbs.push(section);
                crumbs.push(page);
            }
            _ => crumbs.push(BREADCRUMB_DEFAULT_PAGE),
        }
        crumbs
    }

    fn buttons(&self, ctx: &RenderContext, width: u16) -> Vec<HeaderButton> {
        let palette = &ctx.palette;
        let outline = Style::default().fg(palette.foreground);
        let muted = Style::default().fg(palette.muted);
        let compact = width < COMPACT_WIDTH;

        let label = |icon: IconName, text: &str, key: char| {
            if compact {
                format!(" {} ", ctx.icons.glyph(icon))
            } else {
                format!(" {} {} ({}) ", ctx.icons.glyph(icon), text, key)
            }
        };

        let mut buttons = Vec::new();

        if width >= NARROW_WIDTH {
            buttons.push(HeaderButton {
                text: format!("[{} {:<16}]", ctx.icons.glyph(IconName::Search), SEARCH_PLACEHOLDER),
                style: muted,
                action: Action::Inert(Affordance::Search),
            });
        }

        buttons.push(HeaderButton {
            text: label(IconName::Filter, BUTTON_FILTER, 'f'),
            style: outline,
            action: Action::Inert(Affordance::Filter),
        });
        buttons.push(HeaderButton {
            text: label(IconName::Download, BUTTON_EXPORT, 'x'),
            style: outline,
            action: Action::Inert(Affordance::Export),
        });
        buttons.push(HeaderButton {
            text: label(IconName::Plus, BUTTON_ADD_NEW, 'n'),
            style: Style::default()
                .fg(palette.primary_fg)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
            action: Action::Inert(Affordance::AddNew),
        });

        // The toggle shows nothing until the stored preference has been read
        if ctx.theme.is_hydrated() {
            buttons.push(HeaderButton {
                text: format!(" {} ", ctx.icons.theme_icon(ctx.theme.resolved())),
                style: outline,
                action: Action::ToggleTheme,
            });
        }

        buttons
    }

    /// Handle a click on one of the header controls
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        self.hitboxes
            .iter()
            .find(|(rect, _)| {
                mouse.column >= rect.x && mouse.column < rect.right() && mouse.row >= rect.y && mouse.row < rect.bottom()
            })
            .map_or(Action::None, |(_, action)| action.clone())
    }
}

impl Component for HeaderComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('/') => Action::Inert(Affordance::Search),
            KeyCode::Char('f') => Action::Inert(Affordance::Filter),
            KeyCode::Char('x') => Action::Inert(Affordance::Export),
            KeyCode::Char('n') => Action::Inert(Affordance::AddNew),
            KeyCode::Char('t') => Action::ToggleTheme,
            KeyCode::Char('T') => Action::OpenMenu(MenuKind::Theme),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Navigate(target) = action {
            self.active = Some(target);
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(palette.border));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if inner.height == 0 {
            return;
        }
        let line_area = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);

        let crumbs = Self::breadcrumbs(self.active);
        let separator = format!(" {} ", ctx.icons.breadcrumb_separator());
        let mut spans = Vec::new();
        for (index, crumb) in crumbs.iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(separator.clone(), Style::default().fg(palette.muted)));
            }
            let style = if index + 1 == crumbs.len() {
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.muted)
            };
            spans.push(Span::styled(*crumb, style));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), line_area);

        // Buttons are laid out right to left from the edge of the header
        self.hitboxes.clear();
        let mut x = line_area.right();
        for button in self.buttons(ctx, rect.width).into_iter().rev() {
            let width = Line::from(button.text.as_str()).width() as u16;
            if x < line_area.x + width + 1 {
                break;
            }
            x -= width;
            let area = Rect::new(x, line_area.y, width, 1);
            f.render_widget(Paragraph::new(Span::styled(button.text, button.style)), area);
            self.hitboxes.push((area, button.action));
            x = x.saturating_sub(1);
        }
    }
}

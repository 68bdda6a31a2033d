//! Popup menu anchored to the control that opened it.

use crate::constants::{MENU_TITLE_ORDER_ACTIONS, MENU_TITLE_THEME};
use crate::fixtures::{CURRENT_USER, ORDER_ACTIONS_MENU, USER_MENU};
use crate::models::MenuEntry;
use crate::theme::ThemePreference;
use crate::ui::core::{Action, Affordance, Component, MenuKind, RenderContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Clear, List, ListItem, ListState},
    Frame,
};

/// Light, dark and system, in that order
pub const THEME_MENU: &[MenuEntry] = &[
    MenuEntry::item("Light", None),
    MenuEntry::item("Dark", None),
    MenuEntry::item("System", None),
];

pub struct DropdownMenu {
    kind: MenuKind,
    title: String,
    subtitle: Option<&'static str>,
    entries: &'static [MenuEntry],
    list_state: ListState,
    anchor: (u16, u16),
    area: Rect,
}

impl DropdownMenu {
    /// Menu for `kind`, drawn with its top-left corner at `anchor` when it fits
    pub fn new(kind: MenuKind, anchor: (u16, u16)) -> Self {
        let (title, subtitle, entries) = match kind {
            MenuKind::User => (CURRENT_USER.name.to_string(), Some(CURRENT_USER.email), USER_MENU),
            MenuKind::OrderActions { .. } => (MENU_TITLE_ORDER_ACTIONS.to_string(), None, ORDER_ACTIONS_MENU),
            MenuKind::Theme => (MENU_TITLE_THEME.to_string(), None, THEME_MENU),
        };

        let mut list_state = ListState::default();
        list_state.select(entries.iter().position(MenuEntry::is_item));

        Self {
            kind,
            title,
            subtitle,
            entries,
            list_state,
            anchor,
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> MenuKind {
        self.kind
    }

    #[must_use]
    pub fn entries(&self) -> &'static [MenuEntry] {
        self.entries
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Move to the next or previous item, skipping separators
    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.entries.len();
        let current = self.list_state.selected().unwrap_or(0);
        for offset in 1..=len {
            let index = if forward {
                (current + offset) % len
            } else {
                (current + len - offset % len) % len
            };
            if self.entries[index].is_item() {
                self.list_state.select(Some(index));
                return;
            }
        }
    }

    /// Action for the item under the cursor
    pub fn activate(&self) -> Action {
        let Some(label) = self.cursor().and_then(|index| self.entries.get(index)).and_then(MenuEntry::label) else {
            return Action::None;
        };

        match self.kind {
            MenuKind::Theme => label
                .parse::<ThemePreference>()
                .map_or(Action::None, Action::SetTheme),
            _ => Action::Inert(Affordance::MenuItem(label)),
        }
    }

    fn header_lines(&self) -> u16 {
        // title (+ subtitle) and a rule
        if self.subtitle.is_some() {
            3
        } else {
            2
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let area = self.area;
        let inside =
            mouse.column >= area.x && mouse.column < area.right() && mouse.row >= area.y && mouse.row < area.bottom();
        if !inside {
            return Action::CloseMenu;
        }

        let first_entry = area.y + 1 + self.header_lines();
        if mouse.row < first_entry {
            return Action::None;
        }
        let index = (mouse.row - first_entry) as usize;
        match self.entries.get(index) {
            Some(entry) if entry.is_item() => {
                self.list_state.select(Some(index));
                self.activate()
            }
            _ => Action::None,
        }
    }
}

impl Component for DropdownMenu {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::CloseMenu,
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let muted = Style::default().fg(palette.muted);

        let label_width = self
            .entries
            .iter()
            .filter_map(MenuEntry::label)
            .map(|label| label.chars().count() + 3)
            .chain([self.title.chars().count(), self.subtitle.map_or(0, |s| s.chars().count())])
            .max()
            .unwrap_or(0) as u16;
        let width = label_width + 4;
        let height = self.entries.len() as u16 + self.header_lines() + 2;

        let area = LayoutManager::anchored_rect(self.anchor.0, self.anchor.1, width, height, rect);
        self.area = area;
        f.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.background).fg(palette.foreground));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rule = "─".repeat(inner.width as usize);
        let mut items: Vec<ListItem> = Vec::new();
        items.push(ListItem::new(Line::from(Span::styled(
            format!(" {}", self.title),
            Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
        ))));
        if let Some(subtitle) = self.subtitle {
            items.push(ListItem::new(Line::from(Span::styled(format!(" {subtitle}"), muted))));
        }
        items.push(ListItem::new(Line::from(Span::styled(rule.clone(), muted))));

        let current_theme = ctx.theme.preference();
        for entry in self.entries {
            let line = match entry {
                MenuEntry::Item { label, icon } => {
                    let icon = icon.map_or("  ".to_string(), |name| format!("{} ", ctx.icons.glyph(name)));
                    let marker = match self.kind {
                        MenuKind::Theme if label.eq_ignore_ascii_case(current_theme.as_str()) => {
                            format!(" {}", ctx.icons.bullet())
                        }
                        _ => String::new(),
                    };
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(icon, muted),
                        Span::raw(*label),
                        Span::styled(marker, Style::default().fg(palette.accent)),
                    ])
                }
                MenuEntry::Separator => Line::from(Span::styled(rule.clone(), muted)),
            };
            items.push(ListItem::new(line));
        }

        // Offset the cursor past the header rows
        let header = self.header_lines() as usize;
        let mut state = ListState::default().with_selected(self.list_state.selected().map(|index| index + header));
        let list = List::new(items).highlight_style(
            Style::default()
                .bg(palette.selection_bg)
                .fg(palette.selection_fg)
                .add_modifier(Modifier::BOLD),
        );
        f.render_stateful_widget(list, inner, &mut state);
    }
}

//! Navigation sidebar.
//!
//! Renders the brand header, the main navigation tree with collapsible
//! sections, the secondary links, the theme indicator and the signed-in user.
//! Keyboard and mouse input move a cursor over the selectable rows.

use crate::constants::GROUP_MAIN_NAVIGATION;
use crate::models::{NavItem, UserProfile};
use crate::ui::components::collapsible::CollapsibleSection;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::sidebar_item_component::{RowState, SidebarItem, SidebarItemType};
use crate::ui::core::{Action, Component, MenuKind, NavTarget, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use log::debug;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, List, ListItem, ListState},
    Frame,
};
use std::collections::HashMap;

pub struct SidebarComponent {
    main: &'static [NavItem],
    secondary: &'static [NavItem],
    user: UserProfile,
    sections: HashMap<&'static str, CollapsibleSection>,
    items: Vec<SidebarItemType>,
    list_state: ListState,
    active: Option<NavTarget>,
    icon_only: bool,
    theme_indicator: Option<String>,
    scrollbar_helper: ScrollbarHelper,
}

impl SidebarComponent {
    pub fn new(main: &'static [NavItem], secondary: &'static [NavItem], user: UserProfile) -> Self {
        let sections = main
            .iter()
            .filter(|item| item.is_collapsible())
            .map(|item| (item.title, CollapsibleSection::new(item)))
            .collect();

        let active = main
            .iter()
            .chain(secondary)
            .find(|item| item.is_active && !item.is_collapsible())
            .map(|item| NavTarget::page(item.title));

        let mut sidebar = Self {
            main,
            secondary,
            user,
            sections,
            items: Vec::new(),
            list_state: ListState::default(),
            active,
            icon_only: false,
            theme_indicator: None,
            scrollbar_helper: ScrollbarHelper::new(),
        };
        sidebar.build_item_list();
        sidebar.select_first_selectable();
        sidebar
    }

    /// Build the flattened row list, respecting section fold states. The
    /// cursor follows the row it was on when that row is still listed.
    fn build_item_list(&mut self) {
        let previous = self.selected_item().cloned();
        self.items.clear();

        self.items.push(SidebarItemType::Brand);
        self.items.push(SidebarItemType::Spacer);
        self.items.push(SidebarItemType::GroupLabel(GROUP_MAIN_NAVIGATION));

        for item in self.main {
            if !item.is_collapsible() {
                self.items.push(SidebarItemType::Link(item));
                continue;
            }

            let is_expanded = self.is_expanded(item.title);
            self.items.push(SidebarItemType::Section { item, is_expanded });

            // Children are not reachable while the sidebar is collapsed to icons
            if is_expanded && !self.icon_only {
                let last = item.children.len() - 1;
                for (index, child) in item.children.iter().enumerate() {
                    self.items.push(SidebarItemType::SubLink {
                        item: child,
                        section: item.title,
                        is_last: index == last,
                    });
                }
            }
        }

        self.items.push(SidebarItemType::Spacer);
        for item in self.secondary {
            self.items.push(SidebarItemType::Link(item));
        }

        if let Some(label) = &self.theme_indicator {
            self.items.push(SidebarItemType::Spacer);
            self.items.push(SidebarItemType::ThemeIndicator(label.clone()));
        }

        self.items.push(SidebarItemType::Spacer);
        self.items.push(SidebarItemType::UserRow(self.user));

        let same_row = previous.and_then(|row| self.items.iter().position(|item| item.is_same_row(&row)));
        match (same_row, self.list_state.selected()) {
            (Some(index), _) => self.list_state.select(Some(index)),
            (None, Some(selected)) if selected >= self.items.len() => {
                self.list_state.select(Some(self.items.len() - 1));
            }
            _ => {}
        }
    }

    fn select_first_selectable(&mut self) {
        let first = self.items.iter().position(SidebarItem::is_selectable);
        self.list_state.select(first);
    }

    /// Whether the named section is expanded. Unknown titles read as collapsed.
    #[must_use]
    pub fn is_expanded(&self, title: &str) -> bool {
        self.sections.get(title).is_some_and(CollapsibleSection::is_expanded)
    }

    /// Flip the named section; returns the new state
    pub fn toggle_section(&mut self, title: &str) -> Option<bool> {
        let expanded = self.sections.get_mut(title)?.toggle();
        debug!("sidebar section '{}' expanded={}", title, expanded);
        self.build_item_list();
        Some(expanded)
    }

    fn set_section(&mut self, title: &str, expanded: bool) {
        if let Some(section) = self.sections.get_mut(title) {
            if expanded {
                section.expand();
            } else {
                section.collapse();
            }
            self.build_item_list();
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<NavTarget> {
        self.active
    }

    #[must_use]
    pub fn is_icon_only(&self) -> bool {
        self.icon_only
    }

    /// Switch between the full sidebar and the icon rail
    pub fn toggle_icon_only(&mut self) {
        self.icon_only = !self.icon_only;
        self.build_item_list();
        if !self.selected_item().is_some_and(SidebarItem::is_selectable) {
            self.select_first_selectable();
        }
    }

    /// Show or hide the theme indicator row
    pub fn set_theme_indicator(&mut self, label: Option<String>) {
        if self.theme_indicator != label {
            self.theme_indicator = label;
            self.build_item_list();
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SidebarItemType] {
        &self.items
    }

    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    fn selected_item(&self) -> Option<&SidebarItemType> {
        self.list_state.selected().and_then(|index| self.items.get(index))
    }

    /// Move the cursor to the next (`forward`) or previous selectable row, wrapping
    pub fn move_cursor(&mut self, forward: bool) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);

        for offset in 1..=len {
            let index = if forward {
                (current + offset) % len
            } else {
                (current + len - offset % len) % len
            };
            if self.items[index].is_selectable() {
                self.list_state.select(Some(index));
                return;
            }
        }
    }

    /// Activate the row under the cursor
    pub fn activate(&mut self) -> Action {
        let Some(item) = self.selected_item().cloned() else {
            return Action::None;
        };

        match item {
            SidebarItemType::Section { item, .. } => {
                if self.icon_only {
                    // Expanding from the rail brings the full sidebar back
                    self.icon_only = false;
                    self.set_section(item.title, true);
                } else {
                    self.toggle_section(item.title);
                }
                Action::None
            }
            SidebarItemType::ThemeIndicator(_) => Action::OpenMenu(MenuKind::Theme),
            SidebarItemType::UserRow(_) => Action::OpenMenu(MenuKind::User),
            other => other.nav_target().map_or(Action::None, Action::Navigate),
        }
    }

    /// `h`: collapse the section under the cursor, or the parent of a sub-link
    fn collapse_at_cursor(&mut self) {
        let Some(title) = self.selected_item().and_then(SidebarItem::section_title) else {
            return;
        };
        self.set_section(title, false);
        let parent = self
            .items
            .iter()
            .position(|row| matches!(row, SidebarItemType::Section { item, .. } if item.title == title));
        self.list_state.select(parent);
    }

    /// `l`: expand the section under the cursor
    fn expand_at_cursor(&mut self) {
        if let Some(SidebarItemType::Section { item, .. }) = self.selected_item().cloned() {
            self.set_section(item.title, true);
        }
    }

    /// Handle mouse events inside the sidebar `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Skip the top and bottom borders
                if mouse.row > area.y && mouse.row < area.y + area.height - 1 {
                    let clicked_index = self.list_state.offset() + (mouse.row - area.y - 1) as usize;

                    match self.items.get(clicked_index) {
                        Some(item) if item.is_selectable() => {
                            self.list_state.select(Some(clicked_index));
                            self.activate()
                        }
                        _ => Action::None,
                    }
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp => {
                self.move_cursor(false);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.move_cursor(true);
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('h') | KeyCode::Left => {
                self.collapse_at_cursor();
                Action::None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                self.expand_at_cursor();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(target) => {
                self.active = Some(target);
                // Pass the action through to AppComponent for further processing
                Action::Navigate(target)
            }
            Action::ToggleSidebarMode => {
                self.toggle_icon_only();
                Action::ToggleSidebarMode
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let indicator = ctx.theme.is_hydrated().then(|| ctx.theme.indicator_label());
        self.set_theme_indicator(indicator);

        let palette = &ctx.palette;
        let width = rect.width.saturating_sub(2) as usize;
        let icon_only = self.icon_only;
        let active = self.active;

        let all_items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let state = RowState {
                    is_active: active.is_some() && item.nav_target() == active,
                    icon_only,
                };
                item.render(ctx, state, width)
            })
            .collect();

        let total_items = all_items.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::split(rect, total_items, 1);

        let available_height = rect.height.saturating_sub(2) as usize;
        let current_position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items.saturating_sub(1), current_position, available_height);

        let list = List::new(all_items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(palette.border))
                    .style(Style::default().bg(palette.sidebar_bg)),
            )
            .highlight_style(
                Style::default()
                    .bg(palette.selection_bg)
                    .fg(palette.selection_fg)
                    .add_modifier(Modifier::BOLD),
            );

        f.render_stateful_widget(list, list_area, &mut self.list_state);

        self.scrollbar_helper.render(f, scrollbar_area, ctx);
    }
}

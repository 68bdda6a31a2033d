use crate::config::UiConfig;
use crate::constants::{LOG_THEME_HYDRATED, LOG_THEME_SAVED};
use crate::fixtures::{CURRENT_USER, MAIN_NAVIGATION, SECONDARY_NAVIGATION};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::storage::PreferenceStore;
use crate::theme::ThemeState;
use crate::ui::components::{
    DashboardComponent, DashboardData, DialogComponent, DropdownMenu, HeaderComponent, SidebarComponent, StatusBar,
};
use crate::ui::core::{
    Action, Component, DialogType, EventType, Focus, MenuKind, NavTarget, RenderContext, TaskManager,
};
use crate::ui::layout::{LayoutManager, MainAreas};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::warn;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Lines taken by the dashboard header
const HEADER_HEIGHT: u16 = 2;

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    header: HeaderComponent,
    dashboard: DashboardComponent,
    dialog: DialogComponent,
    menu: Option<DropdownMenu>,

    // Shared state
    theme: ThemeState,
    icons: IconService,
    focus: Focus,
    active: Option<NavTarget>,
    sidebar_width: u16,
    areas: MainAreas,

    // Services
    store: Arc<dyn PreferenceStore>,
    logger: Logger,
    task_manager: TaskManager,
    action_rx: mpsc::UnboundedReceiver<Action>,
    hydration_started: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(ui: &UiConfig, theme: ThemeState, store: Arc<dyn PreferenceStore>, logger: Logger) -> Self {
        Self::with_data(ui, theme, store, logger, DashboardData::default())
    }

    pub fn with_data(
        ui: &UiConfig,
        theme: ThemeState,
        store: Arc<dyn PreferenceStore>,
        logger: Logger,
        data: DashboardData,
    ) -> Self {
        let (task_manager, action_rx) = TaskManager::new();
        let sidebar = SidebarComponent::new(MAIN_NAVIGATION, SECONDARY_NAVIGATION, CURRENT_USER);
        let active = sidebar.active();

        Self {
            sidebar,
            header: HeaderComponent::new(active),
            dashboard: DashboardComponent::new(data),
            dialog: DialogComponent::new(logger.clone()),
            menu: None,
            theme,
            icons: IconService::new(ui.icon_theme),
            focus: Focus::Sidebar,
            active,
            sidebar_width: ui.sidebar_width,
            areas: MainAreas {
                sidebar: Rect::default(),
                main: Rect::default(),
                status: Rect::default(),
            },
            store,
            logger,
            task_manager,
            action_rx,
            hydration_started: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn theme(&self) -> &ThemeState {
        &self.theme
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn active(&self) -> Option<NavTarget> {
        self.active
    }

    pub fn menu(&self) -> Option<&DropdownMenu> {
        self.menu.as_ref()
    }

    pub fn dialog_type(&self) -> Option<DialogType> {
        self.dialog.dialog_type
    }

    pub fn sidebar(&self) -> &SidebarComponent {
        &self.sidebar
    }

    pub fn dashboard(&self) -> &DashboardComponent {
        &self.dashboard
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Read the persisted theme once the first frame is on screen. Later
    /// calls do nothing.
    pub fn start_hydration(&mut self) {
        if self.hydration_started {
            return;
        }
        self.hydration_started = true;
        self.task_manager.spawn_preference_load(self.store.clone());
    }

    /// Let pending preference writes finish before the process exits
    pub async fn shutdown(&mut self) {
        self.task_manager.wait_for_all().await;
    }

    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('b') => Action::ToggleSidebarMode,
            KeyCode::Char('u') => Action::OpenMenu(MenuKind::User),
            KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
            _ => Action::None,
        }
    }

    /// Route a key to the dialog, the open menu, global bindings, the header
    /// and finally the focused pane
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if let Some(menu) = self.menu.as_mut() {
            return menu.handle_key_events(key);
        }

        let action = self.handle_global_key(key);
        if action != Action::None {
            return action;
        }
        let action = self.header.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        match self.focus {
            Focus::Sidebar => {
                let action = self.sidebar.handle_key_events(key);
                if action != Action::None {
                    return action;
                }
                // Unfocused, the dashboard only scrolls
                self.dashboard.handle_key_events(key)
            }
            Focus::Orders => self.dashboard.handle_key_events(key),
        }
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if self.dialog.is_visible() {
            return Action::None;
        }
        if let Some(menu) = self.menu.as_mut() {
            return menu.handle_mouse(mouse);
        }

        let contains = |rect: Rect| {
            mouse.column >= rect.x && mouse.column < rect.right() && mouse.row >= rect.y && mouse.row < rect.bottom()
        };
        let header_area = Rect::new(self.areas.main.x, self.areas.main.y, self.areas.main.width, HEADER_HEIGHT);

        if contains(self.areas.sidebar) {
            self.sidebar.handle_mouse(mouse, self.areas.sidebar)
        } else if contains(header_area) {
            self.header.handle_mouse(mouse)
        } else {
            self.dashboard.handle_mouse(mouse)
        }
    }

    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
    }

    /// Screen position for a menu of `kind`
    fn menu_anchor(&self, kind: MenuKind) -> (u16, u16) {
        let main = self.areas.main;
        match kind {
            MenuKind::User => (self.areas.sidebar.x + 1, self.areas.sidebar.bottom().saturating_sub(2)),
            MenuKind::Theme => (main.right().saturating_sub(24), main.y + 1),
            MenuKind::OrderActions { .. } => (main.x + main.width / 2, main.y + HEADER_HEIGHT + 4),
        }
    }

    /// Apply an action that changes app-level state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(target) => {
                self.active = Some(target);
                match target.section {
                    Some(section) => self.logger.log(format!("Navigate: {} › {}", section, target.page)),
                    None => self.logger.log(format!("Navigate: {}", target.page)),
                }
                Action::None
            }
            Action::ToggleSidebarMode => {
                self.logger.log(format!(
                    "Sidebar: {}",
                    if self.sidebar.is_icon_only() { "icons" } else { "expanded" }
                ));
                Action::None
            }
            Action::FocusNext => {
                self.focus = match self.focus {
                    Focus::Sidebar => Focus::Orders,
                    Focus::Orders => Focus::Sidebar,
                };
                self.dashboard.set_orders_focused(self.focus == Focus::Orders);
                Action::None
            }
            Action::ToggleTheme => {
                let preference = self.theme.toggle();
                self.logger.log(format!("Theme: toggled to {}", preference));
                self.task_manager.spawn_preference_save(self.store.clone(), preference);
                Action::None
            }
            Action::SetTheme(preference) => {
                self.menu = None;
                self.theme.set_preference(preference);
                self.logger.log(format!("Theme: set to {}", preference));
                self.task_manager.spawn_preference_save(self.store.clone(), preference);
                Action::None
            }
            Action::ThemeHydrated(persisted) => {
                self.theme.hydrate(persisted);
                let stored = persisted.map_or("none".to_string(), |p| p.to_string());
                self.logger.log(format!(
                    "{} (stored: {}, active: {})",
                    LOG_THEME_HYDRATED,
                    stored,
                    self.theme.indicator_label()
                ));
                Action::None
            }
            Action::ThemeLoadFailed(error) => {
                // Fall back to the default preference, the toggle still works
                warn!("theme preference could not be read: {}", error);
                self.theme.hydrate(None);
                self.logger.log(format!("Theme: load failed: {}", error));
                Action::None
            }
            Action::ThemeSaved(preference) => {
                self.logger.log(format!("{}: {}", LOG_THEME_SAVED, preference));
                Action::None
            }
            Action::ThemeSaveFailed(error) => {
                warn!("theme preference could not be saved: {}", error);
                self.logger.log(format!("Theme: save failed: {}", error));
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icons: {:?}", self.icons.theme()));
                Action::None
            }
            Action::OpenMenu(kind) => {
                if matches!(kind, MenuKind::OrderActions { .. }) && self.focus != Focus::Orders {
                    self.focus = Focus::Orders;
                    self.dashboard.set_orders_focused(true);
                }
                self.menu = Some(DropdownMenu::new(kind, self.menu_anchor(kind)));
                Action::None
            }
            Action::CloseMenu => {
                self.menu = None;
                Action::None
            }
            Action::Inert(affordance) => {
                self.menu = None;
                self.logger.log(format!("Not available yet: {}", affordance.label()));
                Action::None
            }
            Action::Quit => {
                self.should_quit = true;
                Action::Quit
            }
            other => other,
        }
    }

    /// Drain actions reported by background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.action_rx.try_recv() {
            actions.push(action);
        }

        for (task_id, description) in self.task_manager.cleanup_finished_tasks() {
            log::debug!("background task {} finished: {}", task_id, description);
        }

        actions
    }

    /// Apply every pending background result; returns whether any arrived
    pub fn apply_background_actions(&mut self) -> bool {
        let actions = self.process_background_actions();
        let any = !actions.is_empty();
        for action in actions {
            let action = self.update(action);
            self.handle_app_action(action);
        }
        any
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.sidebar.update(action);
        self.header.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, _ctx: &RenderContext) {
        self.draw(f, rect);
    }
}

impl AppComponent {
    /// Draw the whole screen
    pub fn draw(&mut self, f: &mut Frame, rect: Rect) {
        let ctx = RenderContext::new(&self.theme, &self.icons);
        f.buffer_mut().set_style(
            rect,
            Style::default().bg(ctx.palette.background).fg(ctx.palette.foreground),
        );

        self.areas = LayoutManager::main_layout(rect, self.sidebar_width, self.sidebar.is_icon_only());
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(self.areas.main);

        self.sidebar.render(f, self.areas.sidebar, &ctx);
        self.header.render(f, header_area, &ctx);
        self.dashboard.render(f, body_area, &ctx);
        StatusBar::render(f, self.areas.status, &ctx, self.focus);

        if let Some(menu) = self.menu.as_mut() {
            menu.render(f, rect, &ctx);
        }
        self.dialog.render(f, rect, &ctx);
    }
}

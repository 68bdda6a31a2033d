use crate::theme::ThemePreference;

/// Placeholder navigation target recorded when a sidebar link is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    /// Title of the enclosing collapsible section, if any
    pub section: Option<&'static str>,
    pub page: &'static str,
}

impl NavTarget {
    pub const fn page(page: &'static str) -> Self {
        Self { section: None, page }
    }

    pub const fn in_section(section: &'static str, page: &'static str) -> Self {
        Self {
            section: Some(section),
            page,
        }
    }
}

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Orders,
}

/// Dropdown menus that can be opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    User,
    OrderActions { order_index: usize },
    Theme,
}

/// Controls that are rendered but do nothing yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Search,
    Filter,
    Export,
    AddNew,
    ViewAllOrders,
    MenuItem(&'static str),
}

impl Affordance {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Affordance::Search => "Search",
            Affordance::Filter => "Filter",
            Affordance::Export => "Export",
            Affordance::AddNew => "Add New",
            Affordance::ViewAllOrders => "View All",
            Affordance::MenuItem(label) => *label,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(NavTarget),
    ToggleSidebarMode,
    FocusNext,

    // Theme
    ToggleTheme,
    SetTheme(ThemePreference),
    ThemeHydrated(Option<ThemePreference>),
    ThemeLoadFailed(String),
    ThemeSaved(ThemePreference),
    ThemeSaveFailed(String),
    CycleIconTheme,

    // Menus
    OpenMenu(MenuKind),
    CloseMenu,
    Inert(Affordance),

    // Dialogs
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

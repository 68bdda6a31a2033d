//! Glyph sets. Records refer to icons by [`IconName`]; [`IconService`] turns
//! a name into a glyph for the active set (emoji, unicode or plain ascii).

use serde::{Deserialize, Serialize};

use crate::theme::ResolvedTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    Emoji,
    #[default]
    Unicode,
    /// Safe on terminals without wide-glyph support
    Ascii,
}

/// Named icons referenced by navigation items, KPI cards and header buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Home,
    BarChart,
    ShoppingCart,
    Users,
    Wallet,
    FileText,
    Calendar,
    Inbox,
    Settings,
    HelpCircle,
    Bell,
    Building,
    DollarSign,
    Activity,
    Plus,
    User,
    CreditCard,
    LogOut,
    Eye,
    TrendingUp,
    Search,
    Filter,
    Download,
    MoreHorizontal,
}

/// Direction and disclosure indicators
#[derive(Debug, Clone)]
pub struct IndicatorIcons {
    pub arrow_up: &'static str,
    pub arrow_down: &'static str,
    pub chevron_expanded: &'static str,
    pub chevron_collapsed: &'static str,
    pub tree_branch: &'static str,
    pub tree_last: &'static str,
    pub breadcrumb_separator: &'static str,
    pub bullet: &'static str,
}

/// Sun and moon of the theme toggle
#[derive(Debug, Clone)]
pub struct ThemeIcons {
    pub light: &'static str,
    pub dark: &'static str,
}

#[derive(Debug, Clone)]
pub struct IconSet {
    pub indicators: IndicatorIcons,
    pub theme: ThemeIcons,
}

impl IconTheme {
    /// Ascii, then Unicode, then Emoji, then back to Ascii
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Ascii => Self::Unicode,
            Self::Unicode => Self::Emoji,
            Self::Emoji => Self::Ascii,
        }
    }
}

/// Resolves [`IconName`]s and indicators against the selected [`IconTheme`]
#[derive(Debug, Clone, Default)]
pub struct IconService {
    selected: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(selected: IconTheme) -> Self {
        Self { selected }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.selected
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.selected = theme;
    }

    pub fn cycle_icon_theme(&mut self) {
        self.selected = self.selected.next();
    }

    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.selected {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            indicators: IndicatorIcons {
                arrow_up: "⬆️",
                arrow_down: "⬇️",
                chevron_expanded: "▼",
                chevron_collapsed: "▶",
                tree_branch: "├─",
                tree_last: "└─",
                breadcrumb_separator: "›",
                bullet: "•",
            },
            theme: ThemeIcons {
                light: "☀️",
                dark: "🌙",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            indicators: IndicatorIcons {
                arrow_up: "↑",
                arrow_down: "↓",
                chevron_expanded: "▼",
                chevron_collapsed: "▶",
                tree_branch: "├─",
                tree_last: "└─",
                breadcrumb_separator: "›",
                bullet: "•",
            },
            theme: ThemeIcons { light: "☀", dark: "☾" },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            indicators: IndicatorIcons {
                arrow_up: "^",
                arrow_down: "v",
                chevron_expanded: "v",
                chevron_collapsed: ">",
                tree_branch: "|-",
                tree_last: "`-",
                breadcrumb_separator: ">",
                bullet: "*",
            },
            theme: ThemeIcons { light: "(o)", dark: "(C" },
        }
    }

    /// Map a named icon to its glyph for the current theme
    #[must_use]
    pub fn glyph(&self, name: IconName) -> &'static str {
        match self.selected {
            IconTheme::Emoji => match name {
                IconName::Home => "🏠",
                IconName::BarChart => "📊",
                IconName::ShoppingCart => "🛒",
                IconName::Users => "👥",
                IconName::Wallet => "👛",
                IconName::FileText => "📄",
                IconName::Calendar => "📅",
                IconName::Inbox => "📥",
                IconName::Settings => "⚙️",
                IconName::HelpCircle => "❓",
                IconName::Bell => "🔔",
                IconName::Building => "🏢",
                IconName::DollarSign => "💲",
                IconName::Activity => "📈",
                IconName::Plus => "➕",
                IconName::User => "👤",
                IconName::CreditCard => "💳",
                IconName::LogOut => "🚪",
                IconName::Eye => "👁️",
                IconName::TrendingUp => "📈",
                IconName::Search => "🔍",
                IconName::Filter => "🔽",
                IconName::Download => "📥",
                IconName::MoreHorizontal => "⋯",
            },
            IconTheme::Unicode => match name {
                IconName::Home => "⌂",
                IconName::BarChart => "▥",
                IconName::ShoppingCart => "⊞",
                IconName::Users => "⚇",
                IconName::Wallet => "▣",
                IconName::FileText => "☰",
                IconName::Calendar => "◷",
                IconName::Inbox => "✉",
                IconName::Settings => "⚙",
                IconName::HelpCircle => "?",
                IconName::Bell => "♪",
                IconName::Building => "▦",
                IconName::DollarSign => "$",
                IconName::Activity => "∿",
                IconName::Plus => "+",
                IconName::User => "◉",
                IconName::CreditCard => "▭",
                IconName::LogOut => "⏻",
                IconName::Eye => "◎",
                IconName::TrendingUp => "↗",
                IconName::Search => "⌕",
                IconName::Filter => "⧩",
                IconName::Download => "⤓",
                IconName::MoreHorizontal => "⋯",
            },
            IconTheme::Ascii => match name {
                IconName::Home => "H",
                IconName::BarChart => "#",
                IconName::ShoppingCart => "C",
                IconName::Users => "U",
                IconName::Wallet => "W",
                IconName::FileText => "R",
                IconName::Calendar => "@",
                IconName::Inbox => "M",
                IconName::Settings => "S",
                IconName::HelpCircle => "?",
                IconName::Bell => "!",
                IconName::Building => "B",
                IconName::DollarSign => "$",
                IconName::Activity => "~",
                IconName::Plus => "+",
                IconName::User => "u",
                IconName::CreditCard => "=",
                IconName::LogOut => "x",
                IconName::Eye => "o",
                IconName::TrendingUp => "/",
                IconName::Search => "/",
                IconName::Filter => "Y",
                IconName::Download => "v",
                IconName::MoreHorizontal => "...",
            },
        }
    }

    #[must_use]
    pub fn arrow_up(&self) -> &'static str {
        self.icons().indicators.arrow_up
    }

    #[must_use]
    pub fn arrow_down(&self) -> &'static str {
        self.icons().indicators.arrow_down
    }

    /// Disclosure glyph for a collapsible section
    #[must_use]
    pub fn chevron(&self, expanded: bool) -> &'static str {
        let indicators = self.icons().indicators;
        if expanded {
            indicators.chevron_expanded
        } else {
            indicators.chevron_collapsed
        }
    }

    #[must_use]
    pub fn tree_prefix(&self, is_last: bool) -> &'static str {
        let indicators = self.icons().indicators;
        if is_last {
            indicators.tree_last
        } else {
            indicators.tree_branch
        }
    }

    #[must_use]
    pub fn breadcrumb_separator(&self) -> &'static str {
        self.icons().indicators.breadcrumb_separator
    }

    #[must_use]
    pub fn bullet(&self) -> &'static str {
        self.icons().indicators.bullet
    }

    /// Sun for the light scheme, moon for the dark scheme
    #[must_use]
    pub fn theme_icon(&self, resolved: ResolvedTheme) -> &'static str {
        let icons = self.icons().theme;
        match resolved {
            ResolvedTheme::Light => icons.light,
            ResolvedTheme::Dark => icons.dark,
        }
    }
}

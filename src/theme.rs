//! Theme state, preference resolution and color palettes.
//!
//! The active color scheme is a single [`ThemeState`] value owned by the
//! application component and handed to every component through the render
//! context. It starts unhydrated: the persisted preference is read after the
//! first frame, and theme-dependent icons stay hidden until then.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User-facing theme preference, as persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference '{0}' (expected light, dark or system)")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Concrete scheme after resolving `System` against the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(resolved: ResolvedTheme) -> Self {
        match resolved {
            ResolvedTheme::Light => ThemePreference::Light,
            ResolvedTheme::Dark => ThemePreference::Dark,
        }
    }
}

/// Where the "system" scheme comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemThemeSource {
    /// Inspect the terminal's `COLORFGBG` hint
    #[default]
    Auto,
    Light,
    Dark,
}

impl SystemThemeSource {
    /// Resolve the operating environment's scheme
    #[must_use]
    pub fn detect(self) -> ResolvedTheme {
        match self {
            SystemThemeSource::Light => ResolvedTheme::Light,
            SystemThemeSource::Dark => ResolvedTheme::Dark,
            SystemThemeSource::Auto => {
                let hint = std::env::var("COLORFGBG").ok();
                resolve_colorfgbg(hint.as_deref())
            }
        }
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 0-6 and 8 are the dark ANSI colors. Missing or
/// unparsable hints fall back to dark, the common terminal default.
#[must_use]
pub fn resolve_colorfgbg(value: Option<&str>) -> ResolvedTheme {
    let background = value
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());

    match background {
        Some(0..=6) | Some(8) => ResolvedTheme::Dark,
        Some(_) => ResolvedTheme::Light,
        None => ResolvedTheme::Dark,
    }
}

/// Page-lifetime theme state
#[derive(Debug, Clone)]
pub struct ThemeState {
    preference: Option<ThemePreference>,
    default_preference: ThemePreference,
    system: ResolvedTheme,
    hydrated: bool,
    explicitly_set: bool,
}

impl ThemeState {
    /// Unhydrated state; `default_preference` applies until hydration
    #[must_use]
    pub fn new(default_preference: ThemePreference, system: ResolvedTheme) -> Self {
        Self {
            preference: None,
            default_preference,
            system,
            hydrated: false,
            explicitly_set: false,
        }
    }

    /// Effective preference (persisted or explicit, otherwise the default)
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference.unwrap_or(self.default_preference)
    }

    #[must_use]
    pub fn system(&self) -> ResolvedTheme {
        self.system
    }

    /// Resolve the effective preference to a concrete scheme
    #[must_use]
    pub fn resolved(&self) -> ResolvedTheme {
        match self.preference() {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => self.system,
        }
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Reconcile with the persisted preference. Runs once; an explicit
    /// choice made before hydration completes is kept.
    pub fn hydrate(&mut self, persisted: Option<ThemePreference>) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;
        if !self.explicitly_set {
            self.preference = persisted;
        }
    }

    /// Flip between light and dark, returning the preference to persist.
    /// A `System` preference is replaced by the explicit opposite of the
    /// scheme it currently resolves to.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = ThemePreference::from(self.resolved().opposite());
        self.set_preference(next);
        next
    }

    /// Explicitly choose a preference
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = Some(preference);
        self.explicitly_set = true;
    }

    /// Label shown by the sidebar theme indicator
    #[must_use]
    pub fn indicator_label(&self) -> String {
        match self.preference() {
            ThemePreference::System => format!("System ({})", self.resolved().as_str()),
            other => other.as_str().to_string(),
        }
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.resolved())
    }
}

/// Terminal colors for one scheme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub primary_fg: Color,
    pub secondary: Color,
    pub secondary_fg: Color,
    pub accent: Color,
    /// Affirmative color (upward KPI changes, good news)
    pub positive: Color,
    /// Warning color (downward KPI changes)
    pub negative: Color,
    pub sidebar_bg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(255, 255, 255),
        foreground: Color::Rgb(9, 9, 11),
        muted: Color::Rgb(113, 113, 122),
        border: Color::Rgb(212, 212, 216),
        primary: Color::Rgb(24, 24, 27),
        primary_fg: Color::Rgb(250, 250, 250),
        secondary: Color::Rgb(228, 228, 231),
        secondary_fg: Color::Rgb(24, 24, 27),
        accent: Color::Rgb(37, 99, 235),
        positive: Color::Rgb(22, 163, 74),
        negative: Color::Rgb(220, 38, 38),
        sidebar_bg: Color::Rgb(250, 250, 250),
        selection_bg: Color::Rgb(228, 228, 231),
        selection_fg: Color::Rgb(9, 9, 11),
    };

    pub const DARK: Palette = Palette {
        background: Color::Rgb(9, 9, 11),
        foreground: Color::Rgb(250, 250, 250),
        muted: Color::Rgb(161, 161, 170),
        border: Color::Rgb(63, 63, 70),
        primary: Color::Rgb(250, 250, 250),
        primary_fg: Color::Rgb(24, 24, 27),
        secondary: Color::Rgb(39, 39, 42),
        secondary_fg: Color::Rgb(250, 250, 250),
        accent: Color::Rgb(96, 165, 250),
        positive: Color::Rgb(34, 197, 94),
        negative: Color::Rgb(239, 68, 68),
        sidebar_bg: Color::Rgb(24, 24, 27),
        selection_bg: Color::Rgb(39, 39, 42),
        selection_fg: Color::Rgb(250, 250, 250),
    };

    #[must_use]
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => Self::LIGHT,
            ResolvedTheme::Dark => Self::DARK,
        }
    }
}

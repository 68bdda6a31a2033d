//! Adminboard, a terminal admin dashboard.
//!
//! A terminal rendition of a small business admin
//! dashboard: a sidebar navigation shell, KPI cards, an orders table, an
//! activity feed and placeholder charts, with light/dark theme switching
//! persisted across runs. The interface is built with Ratatui.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`fixtures`] - Static dashboard content
//! * [`theme`] - Theme preference, resolution and palettes
//! * [`storage`] - Persisted theme preference
//! * [`ui`] - Terminal user interface components

/// Command line arguments
pub mod cli;

/// TOML settings file
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity for the preference table
pub mod entities;

/// Static records rendered by the dashboard
pub mod fixtures;

/// Glyph sets for icons, arrows and the theme indicator
pub mod icons;

/// In-memory log for the logs dialog, optional file sink
pub mod logger;

/// Immutable record types shown on the dashboard
pub mod models;

/// Queries against the preference table
pub mod repositories;

/// Preference persistence
pub mod storage;

/// Theme state and color palettes
pub mod theme;

/// Components, layout and the event loop
pub mod ui;

/// Text helpers
pub mod utils;

//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Branding
pub const APP_NAME: &str = "adminboard";
pub const BRAND_NAME: &str = "SASS Admin";
pub const BRAND_VERSION: &str = "v2.1.0";

// Sidebar group labels
pub const GROUP_MAIN_NAVIGATION: &str = "Main Navigation";

// Header
pub const BREADCRUMB_ROOT: &str = "Dashboard";
pub const BREADCRUMB_DEFAULT_PAGE: &str = "Overview";
pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const BUTTON_FILTER: &str = "Filter";
pub const BUTTON_EXPORT: &str = "Export";
pub const BUTTON_ADD_NEW: &str = "Add New";

// Dashboard copy
pub const WELCOME_TITLE: &str = "Dashboard";
pub const WELCOME_SUBTITLE: &str = "Welcome back! Here's what's happening with your business today.";
pub const CHART_TITLE: &str = "Revenue Overview";
pub const CHART_DESCRIPTION: &str = "Monthly revenue for the last 6 months";
pub const CHART_PLACEHOLDER: &str = "Chart visualization would go here";
pub const CHART_PLACEHOLDER_HINT: &str = "Plug a charting widget in here";
pub const PRODUCTS_TITLE: &str = "Top Products";
pub const PRODUCTS_DESCRIPTION: &str = "Best performing products this month";
pub const ORDERS_TITLE: &str = "Recent Orders";
pub const ORDERS_DESCRIPTION: &str = "Latest orders from your customers";
pub const ACTIVITY_TITLE: &str = "Recent Activity";
pub const ACTIVITY_DESCRIPTION: &str = "Latest activities in your system";

// Menu titles
pub const MENU_TITLE_ORDER_ACTIONS: &str = "Actions";
pub const MENU_TITLE_THEME: &str = "Theme";

// Log Messages
pub const LOG_THEME_HYDRATED: &str = "Theme: preference hydrated";
pub const LOG_THEME_SAVED: &str = "Theme: preference saved";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";

// Persisted preference key
pub const PREFERENCE_KEY_THEME: &str = "theme";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Sidebar width when collapsed to icons
pub const SIDEBAR_ICON_WIDTH: u16 = 7;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Width at which the KPI grid switches to four columns
pub const BREAKPOINT_LARGE: u16 = 120;
/// Width at which the KPI grid switches to two columns
pub const BREAKPOINT_MEDIUM: u16 = 60;

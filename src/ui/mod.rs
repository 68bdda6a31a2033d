//! Terminal user interface.
//!
//! [`AppComponent`] owns the sidebar, header, dashboard, menus and dialogs,
//! and [`run_app`] drives it from terminal events.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;

#[path = "components/badge.rs"]
mod badge;
#[path = "components/dashboard_component.rs"]
mod dashboard_component;
#[path = "components/dropdown_menu.rs"]
mod dropdown_menu;
#[path = "components/header_component.rs"]
mod header_component;

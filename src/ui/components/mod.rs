pub mod badge;
pub mod collapsible;
pub mod dashboard_component;
pub mod dialog_component;
pub mod dropdown_menu;
pub mod header_component;
pub mod scrollbar_helper;
pub mod sidebar_component;
pub mod sidebar_item_component;
pub mod status_bar;
pub mod widgets;

pub use badge::{badge_variant_for, create_badge, BadgeVariant};
pub use collapsible::CollapsibleSection;
pub use dashboard_component::{DashboardComponent, DashboardData, DashboardLayout};
pub use dialog_component::DialogComponent;
pub use dropdown_menu::DropdownMenu;
pub use header_component::HeaderComponent;
pub use scrollbar_helper::ScrollbarHelper;
pub use sidebar_component::SidebarComponent;
pub use sidebar_item_component::{SidebarItem, SidebarItemType};
pub use status_bar::StatusBar;

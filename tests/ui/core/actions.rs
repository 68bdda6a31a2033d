use adminboard::theme::ThemePreference;
use adminboard::ui::core::{Action, Affordance, Focus, NavTarget};

#[test]
fn test_affordance_labels() {
    assert_eq!(Affordance::Search.label(), "Search");
    assert_eq!(Affordance::AddNew.label(), "Add New");
    assert_eq!(Affordance::ViewAllOrders.label(), "View All");
    assert_eq!(Affordance::MenuItem("Logout").label(), "Logout");
}

#[test]
fn test_nav_targets() {
    let page = NavTarget::page("Users");
    assert_eq!(page.section, None);
    assert_eq!(page.page, "Users");

    let nested = NavTarget::in_section("Finance", "Invoices");
    assert_eq!(nested.section, Some("Finance"));
    assert_ne!(nested, NavTarget::page("Invoices"));
}

#[test]
fn test_action_equality() {
    assert_eq!(Focus::default(), Focus::Sidebar);
    assert_eq!(
        Action::SetTheme(ThemePreference::Dark),
        Action::SetTheme(ThemePreference::Dark)
    );
    assert_ne!(Action::ThemeHydrated(None), Action::ThemeHydrated(Some(ThemePreference::Light)));
}

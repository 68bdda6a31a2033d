use adminboard::fixtures::RECENT_ORDERS;
use adminboard::icons::{IconService, IconTheme};
use adminboard::theme::{ResolvedTheme, ThemePreference, ThemeState};
use adminboard::ui::components::{DashboardComponent, DashboardData, DashboardLayout};
use adminboard::ui::core::{Action, Affordance, Component, MenuKind, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use crate::buffer_text;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn draw(dashboard: &mut DashboardComponent, terminal: &mut Terminal<TestBackend>) {
    let icons = IconService::new(IconTheme::Unicode);
    let theme = ThemeState::new(ThemePreference::Light, ResolvedTheme::Light);
    terminal
        .draw(|f| dashboard.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
}

#[test]
fn test_layout_is_responsive() {
    let data = DashboardData::default();

    let wide = DashboardLayout::compute(140, &data);
    assert_eq!(wide.chart.y, wide.products.y);
    assert!(wide.chart.width > wide.products.width);
    assert_eq!(wide.kpis.height, 5);

    let medium = DashboardLayout::compute(80, &data);
    assert!(medium.chart.bottom() < medium.products.y);
    assert_eq!(medium.kpis.height, 10);

    let narrow = DashboardLayout::compute(40, &data);
    assert_eq!(narrow.kpis.height, 20);
    assert!(narrow.height > wide.height);
}

#[test]
fn test_first_screen_shows_welcome_and_kpis() {
    let mut dashboard = DashboardComponent::default();
    let mut terminal = Terminal::new(TestBackend::new(130, 40)).unwrap();
    draw(&mut dashboard, &mut terminal);

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Welcome back!"));
    assert!(text.contains("Total Revenue"));
    assert!(text.contains("Active Now"));
    assert!(text.contains("Revenue Overview"));
}

#[test]
fn test_page_down_scrolls_to_lower_panels() {
    let mut dashboard = DashboardComponent::default();
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    draw(&mut dashboard, &mut terminal);
    assert_eq!(dashboard.scroll(), 0);

    for _ in 0..20 {
        assert_eq!(dashboard.handle_key_events(key(KeyCode::PageDown)), Action::None);
    }
    assert!(dashboard.scroll() > 0);
    draw(&mut dashboard, &mut terminal);
    assert!(buffer_text(terminal.backend().buffer()).contains("Avg. Session"));

    let bottom = dashboard.scroll();
    dashboard.handle_key_events(key(KeyCode::PageDown));
    assert_eq!(dashboard.scroll(), bottom);

    dashboard.handle_key_events(key(KeyCode::PageUp));
    assert!(dashboard.scroll() < bottom);
}

#[test]
fn test_order_keys_need_focus() {
    let mut dashboard = DashboardComponent::default();
    assert_eq!(dashboard.handle_key_events(key(KeyCode::Char('j'))), Action::None);
    assert_eq!(dashboard.handle_key_events(key(KeyCode::Enter)), Action::None);
    assert_eq!(dashboard.selected_order(), Some(0));

    dashboard.set_orders_focused(true);
    dashboard.handle_key_events(key(KeyCode::Char('j')));
    dashboard.handle_key_events(key(KeyCode::Char('j')));
    assert_eq!(dashboard.selected_order(), Some(2));
    assert_eq!(
        dashboard.handle_key_events(key(KeyCode::Enter)),
        Action::OpenMenu(MenuKind::OrderActions { order_index: 2 })
    );
    assert_eq!(
        dashboard.handle_key_events(key(KeyCode::Char('v'))),
        Action::Inert(Affordance::ViewAllOrders)
    );
}

#[test]
fn test_focusing_orders_brings_them_into_view() {
    let mut dashboard = DashboardComponent::default();
    let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
    draw(&mut dashboard, &mut terminal);

    dashboard.set_orders_focused(true);
    assert!(dashboard.scroll() > 0);
    draw(&mut dashboard, &mut terminal);

    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Recent Orders"));
    assert!(text.contains(RECENT_ORDERS[0].customer));
}

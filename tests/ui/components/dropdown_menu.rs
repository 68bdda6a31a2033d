use adminboard::icons::{IconService, IconTheme};
use adminboard::theme::{ResolvedTheme, ThemePreference, ThemeState};
use adminboard::ui::components::DropdownMenu;
use adminboard::ui::core::{Action, Affordance, Component, MenuKind, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

use crate::buffer_text;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_escape_closes() {
    let mut menu = DropdownMenu::new(MenuKind::User, (0, 0));
    assert_eq!(menu.handle_key_events(key(KeyCode::Esc)), Action::CloseMenu);
    assert_eq!(menu.handle_key_events(key(KeyCode::Char('q'))), Action::CloseMenu);
}

#[test]
fn test_order_actions_are_inert() {
    let mut menu = DropdownMenu::new(MenuKind::OrderActions { order_index: 1 }, (0, 0));
    menu.handle_key_events(key(KeyCode::Down));
    menu.handle_key_events(key(KeyCode::Down));
    assert_eq!(
        menu.handle_key_events(key(KeyCode::Enter)),
        Action::Inert(Affordance::MenuItem("Cancel order"))
    );
}

#[test]
fn test_theme_menu_wraps_to_light() {
    let mut menu = DropdownMenu::new(MenuKind::Theme, (0, 0));
    menu.handle_key_events(key(KeyCode::Up));
    assert_eq!(
        menu.handle_key_events(key(KeyCode::Enter)),
        Action::SetTheme(ThemePreference::System)
    );
    menu.handle_key_events(key(KeyCode::Down));
    assert_eq!(menu.activate(), Action::SetTheme(ThemePreference::Light));
}

#[test]
fn test_render_and_click() {
    let icons = IconService::new(IconTheme::Unicode);
    let theme = ThemeState::new(ThemePreference::Dark, ResolvedTheme::Dark);
    let mut menu = DropdownMenu::new(MenuKind::User, (2, 1));
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

    terminal
        .draw(|f| menu.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("John Doe"));
    assert!(text.contains("john@company.com"));
    assert!(text.contains("Account Settings"));
    assert!(text.contains("Logout"));

    // Border, name, email, rule, then entries
    assert_eq!(
        menu.handle_mouse(click(4, 1 + 1 + 3 + 1)),
        Action::Inert(Affordance::MenuItem("Billing"))
    );
    assert_eq!(menu.handle_mouse(click(50, 18)), Action::CloseMenu);
}

#[test]
fn test_theme_menu_marks_current_choice() {
    let icons = IconService::new(IconTheme::Ascii);
    let theme = ThemeState::new(ThemePreference::Dark, ResolvedTheme::Light);
    let mut menu = DropdownMenu::new(MenuKind::Theme, (0, 0));
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

    terminal
        .draw(|f| menu.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Dark *"));
    assert!(!text.contains("Light *"));
}

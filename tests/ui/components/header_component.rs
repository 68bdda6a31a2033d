use adminboard::icons::{IconService, IconTheme};
use adminboard::theme::{ResolvedTheme, ThemePreference, ThemeState};
use adminboard::ui::components::HeaderComponent;
use adminboard::ui::core::{Action, Affordance, Component, MenuKind, NavTarget, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

use crate::{buffer_text, find_symbol};

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
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
fn test_breadcrumbs() {
    assert_eq!(HeaderComponent::breadcrumbs(None), vec!["Dashboard", "Overview"]);
    assert_eq!(
        HeaderComponent::breadcrumbs(Some(NavTarget::page("Dashboard"))),
        vec!["Dashboard", "Overview"]
    );
    assert_eq!(
        HeaderComponent::breadcrumbs(Some(NavTarget::page("Users"))),
        vec!["Dashboard", "Users"]
    );
    assert_eq!(
        HeaderComponent::breadcrumbs(Some(NavTarget::in_section("Analytics", "Traffic"))),
        vec!["Dashboard", "Analytics", "Traffic"]
    );
}

#[test]
fn test_placeholder_controls_are_inert() {
    let mut header = HeaderComponent::default();
    assert_eq!(header.handle_key_events(key('/')), Action::Inert(Affordance::Search));
    assert_eq!(header.handle_key_events(key('f')), Action::Inert(Affordance::Filter));
    assert_eq!(header.handle_key_events(key('x')), Action::Inert(Affordance::Export));
    assert_eq!(header.handle_key_events(key('n')), Action::Inert(Affordance::AddNew));
    assert_eq!(header.handle_key_events(key('t')), Action::ToggleTheme);
    assert_eq!(header.handle_key_events(key('T')), Action::OpenMenu(MenuKind::Theme));
    assert_eq!(header.handle_key_events(key('z')), Action::None);
}

#[test]
fn test_toggle_hidden_until_hydrated() {
    let icons = IconService::new(IconTheme::Unicode);
    let mut theme = ThemeState::new(ThemePreference::Light, ResolvedTheme::Dark);
    let mut header = HeaderComponent::new(Some(NavTarget::in_section("E-commerce", "Orders")));
    let mut terminal = Terminal::new(TestBackend::new(110, 2)).unwrap();

    terminal
        .draw(|f| header.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(text.contains("Dashboard › E-commerce › Orders"));
    assert!(text.contains("Filter (f)"));
    assert!(!text.contains('☀'));
    assert!(!text.contains('☾'));

    theme.hydrate(None);
    terminal
        .draw(|f| header.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let (x, y) = find_symbol(&buffer, "☀").expect("sun icon for the light scheme");

    assert_eq!(header.handle_mouse(click(x, y)), Action::ToggleTheme);
}

#[test]
fn test_compact_header_drops_labels() {
    let icons = IconService::new(IconTheme::Unicode);
    let theme = ThemeState::new(ThemePreference::Dark, ResolvedTheme::Dark);
    let mut header = HeaderComponent::default();
    let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();

    terminal
        .draw(|f| header.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    let text = buffer_text(terminal.backend().buffer());
    assert!(!text.contains("Filter"));
    assert!(!text.contains("Search..."));
}

#[test]
fn test_navigate_updates_breadcrumbs() {
    let icons = IconService::new(IconTheme::Ascii);
    let theme = ThemeState::new(ThemePreference::Dark, ResolvedTheme::Dark);
    let mut header = HeaderComponent::default();
    let action = header.update(Action::Navigate(NavTarget::page("Calendar")));
    assert_eq!(action, Action::Navigate(NavTarget::page("Calendar")));

    let mut terminal = Terminal::new(TestBackend::new(110, 2)).unwrap();
    terminal
        .draw(|f| header.render(f, f.area(), &RenderContext::new(&theme, &icons)))
        .unwrap();
    assert!(buffer_text(terminal.backend().buffer()).contains("Dashboard > Calendar"));
}

use adminboard::config::UiConfig;
use adminboard::icons::IconTheme;
use adminboard::logger::Logger;
use adminboard::storage::{MemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore};
use adminboard::theme::{ResolvedTheme, ThemePreference, ThemeState};
use adminboard::ui::core::{Action, DialogType, EventType, Focus, MenuKind, NavTarget};
use adminboard::ui::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::buffer_text;

fn ui_config() -> UiConfig {
    UiConfig {
        icon_theme: IconTheme::Unicode,
        ..UiConfig::default()
    }
}

fn app_with(store: Arc<dyn PreferenceStore>, default: ThemePreference, system: ResolvedTheme) -> AppComponent {
    AppComponent::new(&ui_config(), ThemeState::new(default, system), store, Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn draw(app: &mut AppComponent, terminal: &mut Terminal<TestBackend>) -> String {
    terminal.draw(|f| app.draw(f, f.area())).unwrap();
    buffer_text(terminal.backend().buffer())
}

async fn wait_until_hydrated(app: &mut AppComponent) {
    for _ in 0..200 {
        app.apply_background_actions();
        if app.theme().is_hydrated() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("theme never hydrated");
}

fn temp_db() -> PathBuf {
    std::env::temp_dir()
        .join(format!("adminboard-app-{}", uuid::Uuid::new_v4()))
        .join("preferences.db")
}

#[tokio::test]
async fn test_theme_icons_appear_only_after_hydration() {
    let store = Arc::new(MemoryPreferenceStore::with_raw("dark"));
    let mut app = app_with(store, ThemePreference::System, ResolvedTheme::Light);
    let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();

    let first_frame = draw(&mut app, &mut terminal);
    assert!(first_frame.contains("Dashboard"));
    assert!(!first_frame.contains('☀'));
    assert!(!first_frame.contains('☾'));
    assert!(!app.theme().is_hydrated());

    app.start_hydration();
    wait_until_hydrated(&mut app).await;
    assert_eq!(app.theme().preference(), ThemePreference::Dark);

    let hydrated = draw(&mut app, &mut terminal);
    assert!(hydrated.contains('☾'));
    assert!(hydrated.contains("Theme: dark"));
}

#[tokio::test]
async fn test_unreadable_preference_falls_back_to_default() {
    let store = Arc::new(MemoryPreferenceStore::with_raw("neon"));
    let mut app = app_with(store, ThemePreference::System, ResolvedTheme::Light);

    app.start_hydration();
    wait_until_hydrated(&mut app).await;
    assert_eq!(app.theme().preference(), ThemePreference::System);
    assert_eq!(app.theme().resolved(), ResolvedTheme::Light);
}

#[tokio::test]
async fn test_toggle_persists_across_reload() {
    let path = temp_db();

    {
        let store = Arc::new(SqlitePreferenceStore::open(&path).await.unwrap());
        let mut app = app_with(store, ThemePreference::System, ResolvedTheme::Dark);
        app.start_hydration();
        wait_until_hydrated(&mut app).await;
        assert_eq!(app.theme().resolved(), ResolvedTheme::Dark);

        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme().preference(), ThemePreference::Light);
        assert_eq!(app.theme().resolved(), ResolvedTheme::Light);
        app.shutdown().await;
    }

    let store = Arc::new(SqlitePreferenceStore::open(&path).await.unwrap());
    let mut reloaded = app_with(store, ThemePreference::System, ResolvedTheme::Dark);
    reloaded.start_hydration();
    wait_until_hydrated(&mut reloaded).await;
    assert_eq!(reloaded.theme().preference(), ThemePreference::Light);
    assert_eq!(reloaded.theme().resolved(), ResolvedTheme::Light);

    drop(reloaded);
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_rapid_toggles_persist_the_final_theme() {
    for presses in 2..=7 {
        let path = temp_db();
        let store = Arc::new(SqlitePreferenceStore::open(&path).await.unwrap());
        let mut app = app_with(store.clone(), ThemePreference::System, ResolvedTheme::Dark);
        app.start_hydration();
        wait_until_hydrated(&mut app).await;

        for _ in 0..presses {
            press(&mut app, KeyCode::Char('t'));
        }
        let expected = app.theme().preference();
        app.shutdown().await;

        assert_eq!(
            store.load_theme().await.unwrap(),
            Some(expected),
            "after {presses} toggles"
        );
        drop(app);
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}

#[tokio::test]
async fn test_choice_before_hydration_is_kept() {
    let store = Arc::new(MemoryPreferenceStore::with_raw("light"));
    let mut app = app_with(store.clone(), ThemePreference::System, ResolvedTheme::Dark);

    app.handle_app_action(Action::SetTheme(ThemePreference::Dark));
    app.start_hydration();
    wait_until_hydrated(&mut app).await;
    assert_eq!(app.theme().preference(), ThemePreference::Dark);

    app.shutdown().await;
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));
}

#[tokio::test]
async fn test_theme_menu_sets_preference() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store.clone(), ThemePreference::Light, ResolvedTheme::Light);

    press(&mut app, KeyCode::Char('T'));
    assert_eq!(app.menu().map(|menu| menu.kind()), Some(MenuKind::Theme));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(app.menu().is_none());
    assert_eq!(app.theme().preference(), ThemePreference::Dark);

    app.shutdown().await;
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));
}

#[tokio::test]
async fn test_inert_controls_change_nothing() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);

    let active = app.active();
    for code in [KeyCode::Char('f'), KeyCode::Char('x'), KeyCode::Char('n'), KeyCode::Char('/')] {
        press(&mut app, code);
    }

    assert_eq!(app.active(), active);
    assert_eq!(app.focus(), Focus::Sidebar);
    assert_eq!(app.theme().preference(), ThemePreference::Dark);
    assert!(app.menu().is_none());
    assert!(!app.should_quit());
    assert_eq!(app.active_task_count(), 0);
    assert!(app
        .logger()
        .get_logs()
        .iter()
        .any(|entry| entry.contains("Not available yet: Filter")));
}

#[tokio::test]
async fn test_user_menu_items_close_without_effect() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);

    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.menu().map(|menu| menu.kind()), Some(MenuKind::User));

    press(&mut app, KeyCode::Enter);
    assert!(app.menu().is_none());
    assert!(!app.should_quit());
    assert_eq!(app.theme().preference(), ThemePreference::Dark);
}

#[tokio::test]
async fn test_navigation_updates_active_target() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);
    assert_eq!(app.active(), Some(NavTarget::page("Dashboard")));

    // Dashboard, then the Analytics section, then E-commerce
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert!(app.sidebar().is_expanded("E-commerce"));

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active(), Some(NavTarget::in_section("E-commerce", "Products")));
    assert_eq!(app.sidebar().active(), app.active());
}

#[tokio::test]
async fn test_focus_cycles_and_order_menu_opens() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Orders);

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.menu().map(|menu| menu.kind()),
        Some(MenuKind::OrderActions { order_index: 1 })
    );

    press(&mut app, KeyCode::Esc);
    assert!(app.menu().is_none());

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Sidebar);
}

#[tokio::test]
async fn test_dialogs_and_quit() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);
    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();

    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.dialog_type(), Some(DialogType::Help));
    assert!(draw(&mut app, &mut terminal).contains("Help"));

    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.theme().preference(), ThemePreference::Dark);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.dialog_type(), None);

    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.dialog_type(), Some(DialogType::Logs));
    press(&mut app, KeyCode::Char('q'));
    assert_eq!(app.dialog_type(), None);
    assert!(!app.should_quit());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_sidebar_icon_mode_and_icon_theme() {
    let store = Arc::new(MemoryPreferenceStore::new());
    let mut app = app_with(store, ThemePreference::Dark, ResolvedTheme::Dark);

    press(&mut app, KeyCode::Char('b'));
    assert!(app.sidebar().is_icon_only());
    press(&mut app, KeyCode::Char('b'));
    assert!(!app.sidebar().is_icon_only());

    press(&mut app, KeyCode::Char('i'));
    assert_eq!(app.icons().theme(), IconTheme::Emoji);
}

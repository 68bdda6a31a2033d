use adminboard::storage::{MemoryPreferenceStore, PreferenceError, PreferenceStore};
use adminboard::theme::ThemePreference;
use adminboard::ui::core::{Action, TaskManager};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Light writes take a while to land; dark writes are immediate
#[derive(Default)]
struct SlowLightStore {
    inner: MemoryPreferenceStore,
}

#[async_trait]
impl PreferenceStore for SlowLightStore {
    async fn load_theme(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        self.inner.load_theme().await
    }

    async fn save_theme(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        if preference == ThemePreference::Light {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        self.inner.save_theme(preference).await
    }
}

#[tokio::test]
async fn test_load_reports_stored_preference() {
    let (mut manager, mut rx) = TaskManager::new();
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::with_raw("light"));

    manager.spawn_preference_load(store);
    assert_eq!(manager.task_count(), 1);

    assert_eq!(rx.recv().await, Some(Action::ThemeHydrated(Some(ThemePreference::Light))));
}

#[tokio::test]
async fn test_load_of_empty_store_reports_none() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_preference_load(Arc::new(MemoryPreferenceStore::new()));
    assert_eq!(rx.recv().await, Some(Action::ThemeHydrated(None)));
}

#[tokio::test]
async fn test_save_reports_and_persists() {
    let (mut manager, mut rx) = TaskManager::new();
    let store = Arc::new(MemoryPreferenceStore::new());

    let first = manager.spawn_preference_save(store.clone(), ThemePreference::Dark);
    let second = manager.spawn_preference_save(store.clone(), ThemePreference::Dark);
    assert_ne!(first, second);

    manager.wait_for_all().await;
    assert_eq!(manager.task_count(), 0);
    assert_eq!(rx.recv().await, Some(Action::ThemeSaved(ThemePreference::Dark)));
    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));
}

#[tokio::test]
async fn test_finished_tasks_are_cleaned_up() {
    let (mut manager, mut rx) = TaskManager::new();
    manager.spawn_preference_load(Arc::new(MemoryPreferenceStore::new()));
    rx.recv().await;

    // The task may still be unwinding right after sending
    let mut finished = Vec::new();
    for _ in 0..100 {
        finished.extend(manager.cleanup_finished_tasks());
        if manager.task_count() == 0 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0].1, "Load theme preference");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_latest_save_wins_over_slower_earlier_one() {
    let (mut manager, _rx) = TaskManager::new();
    let store = Arc::new(SlowLightStore::default());

    manager.spawn_preference_save(store.clone(), ThemePreference::Light);
    manager.spawn_preference_save(store.clone(), ThemePreference::Dark);
    manager.wait_for_all().await;

    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Dark));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_burst_of_saves_keeps_the_last_one() {
    let (mut manager, _rx) = TaskManager::new();
    let store = Arc::new(SlowLightStore::default());

    let burst = [
        ThemePreference::Dark,
        ThemePreference::Light,
        ThemePreference::System,
        ThemePreference::Dark,
        ThemePreference::Light,
    ];
    for preference in burst {
        manager.spawn_preference_save(store.clone(), preference);
    }
    manager.wait_for_all().await;

    assert_eq!(store.load_theme().await.unwrap(), Some(ThemePreference::Light));
}

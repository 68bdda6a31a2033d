use super::actions::Action;
use crate::storage::PreferenceStore;
use crate::theme::ThemePreference;
use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub type TaskId = u64;

/// A spawned preference job and what it is doing
#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

/// Runs preference reads and writes off the render loop. Results come back
/// as actions on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    running: BTreeMap<TaskId, BackgroundTask>,
    last_id: TaskId,
    results: UnboundedSender<Action>,
    /// Sequence number of the newest save that reached the store
    written: Arc<Mutex<u64>>,
    last_save: u64,
}

impl TaskManager {
    pub fn new() -> (Self, UnboundedReceiver<Action>) {
        let (results, receiver) = mpsc::unbounded_channel();
        let manager = Self {
            running: BTreeMap::new(),
            last_id: 0,
            results,
            written: Arc::new(Mutex::new(0)),
            last_save: 0,
        };
        (manager, receiver)
    }

    /// Read the persisted theme preference once, after the first frame
    pub fn spawn_preference_load(&mut self, store: Arc<dyn PreferenceStore>) -> TaskId {
        self.spawn("Load theme preference".to_string(), async move {
            let action = store
                .load_theme()
                .await
                .map_or_else(|e| Action::ThemeLoadFailed(e.to_string()), Action::ThemeHydrated);
            Some(action)
        })
    }

    /// Persist a theme preference chosen by the user.
    ///
    /// Saves may run concurrently but the store ends up holding the most
    /// recently submitted preference: a save that acquires the write lock
    /// after a newer one has landed is dropped.
    pub fn spawn_preference_save(&mut self, store: Arc<dyn PreferenceStore>, preference: ThemePreference) -> TaskId {
        self.last_save += 1;
        let seq = self.last_save;
        let written = Arc::clone(&self.written);

        self.spawn(format!("Save theme preference: {preference}"), async move {
            let mut newest = written.lock().await;
            if *newest > seq {
                log::debug!("theme save #{seq} ({preference}) superseded by #{}", *newest);
                return None;
            }
            *newest = seq;
            Some(match store.save_theme(preference).await {
                Ok(()) => Action::ThemeSaved(preference),
                Err(e) => Action::ThemeSaveFailed(e.to_string()),
            })
        })
    }

    fn spawn<F>(&mut self, description: String, job: F) -> TaskId
    where
        F: Future<Output = Option<Action>> + Send + 'static,
    {
        let results = self.results.clone();
        let handle = tokio::spawn(async move {
            if let Some(action) = job.await {
                // The receiver is gone once the app has shut down
                let _ = results.send(action);
            }
        });

        self.last_id += 1;
        let id = self.last_id;
        self.running.insert(
            id,
            BackgroundTask {
                id,
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        id
    }

    /// Forget finished tasks and hand back their ids and descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let (done, running): (BTreeMap<_, _>, BTreeMap<_, _>) = std::mem::take(&mut self.running)
            .into_iter()
            .partition(|(_, task)| task.handle.is_finished());
        self.running = running;

        done.into_iter().map(|(id, task)| (id, task.description)).collect()
    }

    /// Await every tracked task so pending saves land before exit
    pub async fn wait_for_all(&mut self) {
        for task in std::mem::take(&mut self.running).into_values() {
            let elapsed = task.started_at.elapsed();
            if let Err(e) = task.handle.await {
                log::warn!("task {} ({}) failed after {:?}: {}", task.id, task.description, elapsed, e);
            }
        }
    }

    pub fn abort_all(&mut self) {
        for task in std::mem::take(&mut self.running).into_values() {
            task.handle.abort();
        }
    }

    pub fn task_count(&self) -> usize {
        self.running.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

use std::collections::HashMap;
use tokio::task::JoinHandle;
use tracing::debug;

/// Keyed background tasks: spawning under a taken key aborts the old task.
///
/// Commands whose effect on the server must be mirrored in the store go
/// through [`TaskManager::detach`] instead and always run to completion.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub const SESSION: &'static str = "session";
    pub const PLAYLIST: &'static str = "playlist_fetch";
    pub const SEARCH: &'static str = "search";

    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    pub fn spawn<F>(&mut self, key: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(handle) = self.tasks.insert(key, tokio::spawn(future)) {
            if !handle.is_finished() {
                debug!(task = key, "superseded running task");
                handle.abort();
            }
        }
    }

    /// Runs `future` outside the keyed set; no later spawn cancels it.
    pub fn detach<F>(&self, name: &'static str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(task = name, "detached task started");
        tokio::spawn(future);
    }

    #[cfg(test)]
    fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|h| !h.is_finished())
    }

    pub fn abort_all(&mut self) {
        for handle in self.tasks.values() {
            handle.abort();
        }
        self.tasks.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn respawning_a_key_aborts_the_previous_task() {
        let (tx, rx) = flume::unbounded::<&str>();
        let mut tasks = TaskManager::new();

        let slow = tx.clone();
        tasks.spawn(TaskManager::SEARCH, async move {
            tokio::time::sleep(Duration::from_secs(60)).await;
            let _ = slow.send("first");
        });
        tasks.spawn(TaskManager::SEARCH, async move {
            let _ = tx.send("second");
        });

        assert_eq!(rx.recv_async().await.unwrap(), "second");
        assert!(rx.recv_async().await.is_err());
        assert!(!tasks.is_running(TaskManager::PLAYLIST));
    }

    #[tokio::test]
    async fn detached_tasks_survive_later_spawns() {
        let (tx, rx) = flume::unbounded::<&str>();
        let mut tasks = TaskManager::new();

        let slow = tx.clone();
        tasks.detach("play", async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            let _ = slow.send("play");
        });
        let quick = tx.clone();
        tasks.detach("pause", async move {
            let _ = quick.send("pause");
        });
        tasks.spawn(TaskManager::SEARCH, async move {
            let _ = tx.send("search");
        });

        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(rx.recv_async().await.unwrap());
        }
        seen.sort();
        assert_eq!(seen, ["pause", "play", "search"]);
        tasks.abort_all();
    }
}

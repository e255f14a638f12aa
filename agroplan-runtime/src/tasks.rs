//! Task manager for async operations
//!
//! Each task is registered under a [`TaskKey`]. Spawning with a key that is
//! already running aborts the older task first. Every task is also tied to
//! the manager's lifetime [`CancellationToken`]: once [`TaskManager::shutdown`]
//! runs (or the manager is dropped) no task can deliver its action, even one
//! that was already past its last await point.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! tasks.spawn("forecast", async move {
//!     match resolver.fetch(coords).await {
//!         Ok(reading) => Action::ForecastDidLoad(reading),
//!         Err(failure) => Action::ForecastDidFail(failure),
//!     }
//! });
//!
//! // View is going away
//! tasks.shutdown();
//! ```

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio_util::sync::CancellationToken;

use crate::Action;

/// Identifies a task for cancellation and replacement.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages async task lifecycle with automatic cancellation.
///
/// # Type Parameters
///
/// - `A`: The action type that tasks produce
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
    lifetime: CancellationToken,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a new task manager with a fresh lifetime token.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self::with_lifetime(action_tx, CancellationToken::new())
    }

    /// Create a task manager whose lifetime is scoped to `lifetime`.
    ///
    /// Cancelling the token has the same effect as [`shutdown`](Self::shutdown).
    pub fn with_lifetime(action_tx: mpsc::UnboundedSender<A>, lifetime: CancellationToken) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
            lifetime,
        }
    }

    /// Token cancelled when this manager shuts down.
    pub fn lifetime(&self) -> CancellationToken {
        self.lifetime.clone()
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// The future's output is sent to the action channel. Nothing is sent if
    /// the task is aborted or the lifetime token fires first.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        self.cancel(&key);

        if self.lifetime.is_cancelled() {
            tracing::debug!(task = key.name(), "Task manager shut down, not spawning");
            return self;
        }

        let tx = self.action_tx.clone();
        let lifetime = self.lifetime.clone();
        let name = key.name().to_string();
        let handle = tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = lifetime.cancelled() => {
                    tracing::debug!(task = %name, "Task cancelled with its owner");
                }
                action = future => {
                    if lifetime.is_cancelled() {
                        return;
                    }
                    let _ = tx.send(action);
                }
            }
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Cancel a task by key. No-op for unknown keys.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Abort every running task without ending the lifetime.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// End the manager's lifetime: cancel the token and abort all tasks.
    ///
    /// Later calls to [`spawn`](Self::spawn) are ignored.
    pub fn shutdown(&mut self) {
        self.lifetime.cancel();
        self.cancel_all();
    }

    /// Whether a task with the given key is registered and not yet finished.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks
            .get(key)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        self.lifetime.cancel();
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

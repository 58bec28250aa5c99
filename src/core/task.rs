//! Background task runner.
//!
//! Runs one unit of work on the tokio pool and reports its outcome to
//! exactly one of two handlers, exactly once. The UI thread never awaits
//! the work; handlers typically forward the outcome over a channel that the
//! event loop drains.

use std::any::Any;
use std::future::Future;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawns units of work and delivers their outcome through callbacks.
///
/// The runner keeps no busy state and offers no cancellation or timeout.
/// Callers that must not run two tasks at once disable their own triggers.
#[derive(Debug, Clone)]
pub struct TaskRunner {
    handle: Handle,
}

impl TaskRunner {
    /// Creates a runner on the given runtime.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a runner on the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Returns an error when called outside a tokio runtime.
    pub fn from_current() -> Result<Self> {
        let handle = Handle::try_current().context("Task runner requires a tokio runtime")?;
        Ok(Self::new(handle))
    }

    /// Runs `work` on a worker task.
    ///
    /// On `Ok(value)` calls `on_success(value)`; on `Err(e)` or if the work
    /// panics, calls `on_failure(message)`. Exactly one handler runs, once.
    ///
    /// The returned handle resolves after the handler has run; callers are
    /// free to drop it.
    pub fn submit<T, Fut, S, F>(&self, work: Fut, on_success: S, on_failure: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        S: FnOnce(T) + Send + 'static,
        F: FnOnce(String) + Send + 'static,
    {
        let worker = self.handle.spawn(work);
        self.handle.spawn(async move {
            match worker.await {
                Ok(Ok(value)) => on_success(value),
                Ok(Err(e)) => on_failure(format!("{e:#}")),
                Err(join_error) => {
                    let message = if join_error.is_panic() {
                        panic_message(join_error.into_panic().as_ref())
                    } else {
                        join_error.to_string()
                    };
                    on_failure(message);
                }
            }
        })
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Task panicked".to_string()
    }
}

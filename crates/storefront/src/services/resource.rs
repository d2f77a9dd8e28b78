//! Resource loading with cancellation and empty-result fallback.
//!
//! A [`Resource`] is the `{data, loading, error}` triple the front-end
//! renders. [`ResourceLoader`] runs a service call on the runtime and turns
//! its outcome into a resource:
//!
//! - success: `data` is the result, `error` is `None`
//! - failure: a warning is logged, `error` carries a user-facing notice and
//!   `data` falls back to `T::default()` (an empty list for collections)
//!
//! The fetch task is tied to its caller. If the caller goes away while the
//! request is in flight (the HTTP client disconnects, a [`ResourceHandle`]
//! is dropped), the task is aborted instead of finishing into nobody.

use std::future::Future;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::ServiceError;

/// The `{data, loading, error}` state of a loaded resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T: Default> Resource<T> {
    /// A resource whose fetch has not completed yet.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            data: T::default(),
            loading: true,
            error: None,
        }
    }

    /// A resource that failed and fell back to empty data.
    #[must_use]
    pub fn failed(notice: impl Into<String>) -> Self {
        Self {
            data: T::default(),
            loading: false,
            error: Some(notice.into()),
        }
    }
}

impl<T> Resource<T> {
    /// A successfully loaded resource.
    #[must_use]
    pub const fn ready(data: T) -> Self {
        Self {
            data,
            loading: false,
            error: None,
        }
    }

    /// Whether the fetch failed.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Aborts the wrapped task when dropped.
struct AbortOnDrop<T>(JoinHandle<T>);

impl<T> Drop for AbortOnDrop<T> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Runs service calls and converts their outcome into [`Resource`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceLoader;

impl ResourceLoader {
    /// Run `fetch` to completion and return the settled resource.
    ///
    /// `notice` is the message shown to the user if the fetch fails. Dropping
    /// the returned future aborts the fetch.
    pub async fn load<T, F>(notice: &'static str, fetch: F) -> Resource<T>
    where
        T: Default + Send + 'static,
        F: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        let mut task = AbortOnDrop(tokio::spawn(fetch));
        settle(notice, (&mut task.0).await)
    }

    /// Start `fetch` in the background and return a handle that observes it.
    ///
    /// The handle starts in the pending state. Dropping it aborts the fetch.
    pub fn watch<T, F>(notice: &'static str, fetch: F) -> ResourceHandle<T>
    where
        T: Default + Send + Sync + 'static,
        F: Future<Output = Result<T, ServiceError>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(Resource::pending());
        let task = tokio::spawn(async move {
            let outcome = Ok(fetch.await);
            tx.send_replace(settle(notice, outcome));
        });

        ResourceHandle {
            rx,
            task: AbortOnDrop(task),
        }
    }
}

fn settle<T: Default>(
    notice: &'static str,
    outcome: Result<Result<T, ServiceError>, tokio::task::JoinError>,
) -> Resource<T> {
    match outcome {
        Ok(Ok(data)) => Resource::ready(data),
        Ok(Err(err)) => {
            tracing::warn!(error = %err, notice, "resource fetch failed, using empty result");
            Resource::failed(notice)
        }
        Err(err) if err.is_cancelled() => {
            tracing::debug!(notice, "resource fetch cancelled");
            Resource::failed(notice)
        }
        Err(err) => {
            tracing::error!(error = %err, notice, "resource fetch panicked");
            Resource::failed(notice)
        }
    }
}

/// A background fetch observed through a watch channel.
pub struct ResourceHandle<T> {
    rx: watch::Receiver<Resource<T>>,
    task: AbortOnDrop<()>,
}

impl<T: Clone + Default> ResourceHandle<T> {
    /// Snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> Resource<T> {
        self.rx.borrow().clone()
    }

    /// Wait until the fetch settles and return the final state.
    ///
    /// If the fetch task is gone without publishing a result, this resolves
    /// to a failed resource carrying the cancellation error.
    pub async fn settled(&mut self) -> Resource<T> {
        match self.rx.wait_for(|r| !r.loading).await {
            Ok(resource) => resource.clone(),
            Err(_) => Resource::failed(ServiceError::Cancelled.to_string()),
        }
    }

    /// Stop the fetch. The state stays whatever it was.
    pub fn cancel(&self) {
        self.task.0.abort();
    }

    /// Whether the fetch task has stopped (settled or cancelled).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.0.is_finished()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;

    const NOTICE: &str = "No se pudieron cargar los datos";

    async fn slow_fetch(done: Arc<AtomicBool>) -> Result<Vec<u32>, ServiceError> {
        tokio::time::sleep(Duration::from_secs(10)).await;
        done.store(true, Ordering::SeqCst);
        Ok(vec![1, 2, 3])
    }

    #[tokio::test]
    async fn test_load_success() {
        let resource = ResourceLoader::load(NOTICE, async { Ok(vec![1, 2]) }).await;
        assert_eq!(resource, Resource::ready(vec![1, 2]));
        assert!(!resource.loading);
    }

    #[tokio::test]
    async fn test_load_failure_falls_back_to_empty() {
        let resource: Resource<Vec<u32>> = ResourceLoader::load(NOTICE, async {
            Err(ServiceError::Unavailable("boom".to_string()))
        })
        .await;

        assert!(resource.data.is_empty());
        assert!(!resource.loading);
        assert_eq!(resource.error.as_deref(), Some(NOTICE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_load_aborts_fetch() {
        let done = Arc::new(AtomicBool::new(false));

        let timed_out = tokio::time::timeout(
            Duration::from_millis(100),
            ResourceLoader::load(NOTICE, slow_fetch(Arc::clone(&done))),
        )
        .await;
        assert!(timed_out.is_err());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(!done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_starts_pending_then_settles() {
        let done = Arc::new(AtomicBool::new(false));
        let mut handle = ResourceLoader::watch(NOTICE, slow_fetch(Arc::clone(&done)));

        assert_eq!(handle.current(), Resource::pending());

        let settled = handle.settled().await;
        assert_eq!(settled, Resource::ready(vec![1, 2, 3]));
        assert!(done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_aborts_fetch() {
        let done = Arc::new(AtomicBool::new(false));
        let handle = ResourceLoader::watch(NOTICE, slow_fetch(Arc::clone(&done)));
        drop(handle);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(!done.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_handle_settles_as_failed() {
        let done = Arc::new(AtomicBool::new(false));
        let mut handle = ResourceLoader::watch(NOTICE, slow_fetch(Arc::clone(&done)));
        handle.cancel();

        let settled = handle.settled().await;
        assert!(settled.is_error());
        assert!(settled.data.is_empty());
        assert!(handle.is_finished());
        assert!(!done.load(Ordering::SeqCst));
    }
}

//! One-shot background computations.
//!
//! [`Deferred`] runs a fallible computation exactly once on a worker thread
//! and keeps its outcome. Callers can poll it without blocking, which suits
//! progressive rendering (show a placeholder until the graph is ready), or
//! block until it settles.

use std::{
    panic,
    sync::{Arc, Mutex, OnceLock, PoisonError},
    task::Poll,
    thread::{self, JoinHandle},
};

use log::debug;

/// Holds the pending, resolved, or failed outcome of a background computation.
///
/// # Examples
///
/// ```
/// use std::task::Poll;
/// use etymograph::deferred::Deferred;
///
/// let cell: Deferred<u32, String> = Deferred::spawn(|| Ok(6 * 7));
/// assert_eq!(cell.wait(), Ok(&42));
/// assert_eq!(cell.read(), Poll::Ready(Ok(&42)));
/// ```
#[derive(Debug)]
pub struct Deferred<T, E> {
    outcome: Arc<OnceLock<Result<T, E>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl<T, E> Deferred<T, E>
where
    T: Send + Sync + 'static,
    E: Send + Sync + 'static,
{
    /// Starts `task` on a new thread.
    pub fn spawn<F>(task: F) -> Self
    where
        F: FnOnce() -> Result<T, E> + Send + 'static,
    {
        let outcome = Arc::new(OnceLock::new());
        let slot = Arc::clone(&outcome);
        let worker = thread::spawn(move || {
            let result = task();
            debug!(ok = result.is_ok(); "Deferred computation settled");
            // Only this thread ever writes the slot.
            let _ = slot.set(result);
        });

        Self {
            outcome,
            worker: Mutex::new(Some(worker)),
        }
    }

    /// Creates an already settled cell.
    pub fn settled(result: Result<T, E>) -> Self {
        Self {
            outcome: Arc::new(OnceLock::from(result)),
            worker: Mutex::new(None),
        }
    }

    /// Returns the outcome if the computation has settled, without blocking.
    pub fn read(&self) -> Poll<Result<&T, &E>> {
        match self.outcome.get() {
            Some(result) => Poll::Ready(result.as_ref()),
            None => Poll::Pending,
        }
    }

    /// Returns `true` once the computation has produced a value or an error.
    pub fn is_settled(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Blocks until the computation settles and returns its outcome.
    ///
    /// # Panics
    ///
    /// Re-raises the worker's panic if the computation panicked.
    pub fn wait(&self) -> Result<&T, &E> {
        self.join_worker();
        match self.outcome.get() {
            Some(result) => result.as_ref(),
            None => panic!("deferred computation panicked before settling"),
        }
    }

    /// Blocks until the computation settles and takes ownership of its outcome.
    ///
    /// # Panics
    ///
    /// Re-raises the worker's panic if the computation panicked.
    pub fn into_outcome(self) -> Result<T, E> {
        self.join_worker();
        // The worker has exited, so this is the last handle on the slot.
        match Arc::try_unwrap(self.outcome).ok().and_then(OnceLock::into_inner) {
            Some(result) => result,
            None => panic!("deferred computation panicked before settling"),
        }
    }

    fn join_worker(&self) {
        let mut worker = self.worker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(Err(payload)) = worker.take().map(JoinHandle::join) {
            panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc,
    };

    use super::*;

    #[test]
    fn test_pending_until_released() {
        let (release, gate) = mpsc::channel::<()>();
        let cell: Deferred<&str, String> = Deferred::spawn(move || {
            gate.recv().map_err(|err| err.to_string())?;
            Ok("graph")
        });

        assert_eq!(cell.read(), Poll::Pending);
        assert!(!cell.is_settled());

        release.send(()).unwrap();
        assert_eq!(cell.wait(), Ok(&"graph"));
        assert!(cell.is_settled());
        assert_eq!(cell.read(), Poll::Ready(Ok(&"graph")));
    }

    #[test]
    fn test_failure_is_kept() {
        let cell: Deferred<u8, String> = Deferred::spawn(|| Err("hash failed".to_string()));

        assert_eq!(cell.wait(), Err(&"hash failed".to_string()));
        assert!(matches!(cell.read(), Poll::Ready(Err(_))));
    }

    #[test]
    fn test_runs_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let cell: Deferred<usize, ()> =
            Deferred::spawn(move || Ok(counter.fetch_add(1, Ordering::SeqCst)));

        for _ in 0..3 {
            assert_eq!(cell.wait(), Ok(&0));
            let _ = cell.read();
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_wait_from_several_threads() {
        let cell: Arc<Deferred<u32, ()>> = Arc::new(Deferred::spawn(|| Ok(7)));

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || *cell.wait().unwrap())
            })
            .collect();

        for waiter in waiters {
            assert_eq!(waiter.join().unwrap(), 7);
        }
    }

    #[test]
    fn test_into_outcome() {
        let cell: Deferred<String, ()> = Deferred::spawn(|| Ok("graph".to_string()));
        assert_eq!(cell.into_outcome(), Ok("graph".to_string()));

        let failed: Deferred<(), String> = Deferred::spawn(|| Err("failed".to_string()));
        assert_eq!(failed.into_outcome(), Err("failed".to_string()));
    }

    #[test]
    fn test_settled() {
        let cell: Deferred<u8, ()> = Deferred::settled(Ok(1));
        assert!(cell.is_settled());
        assert_eq!(cell.wait(), Ok(&1));
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_worker_panic_propagates() {
        let cell: Deferred<u8, ()> = Deferred::spawn(|| panic!("boom"));
        let _ = cell.wait();
    }
}

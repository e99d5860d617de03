use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// One-shot handle to work running on a worker thread.
///
/// Resolves exactly once: taking the outcome consumes the handle. If the
/// worker goes away without delivering, the handle resolves to the fallback
/// value given at spawn time instead of hanging.
pub struct Pending<T> {
    receiver: Receiver<T>,
    abandoned: fn() -> T,
    generation: u64,
    latest: Option<Arc<AtomicU64>>,
}

impl<T: Send + 'static> Pending<T> {
    pub(crate) fn spawn<F>(name: &str, abandoned: fn() -> T, job: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let spawned = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || {
                // The receiver may already be gone; the result is then unwanted.
                let _ = sender.send(job());
            });
        if let Err(e) = spawned {
            log::error!("failed to spawn {} worker: {}", name, e);
        }
        Self::from_receiver(receiver, abandoned)
    }

    pub(crate) fn ready(value: T, abandoned: fn() -> T) -> Self {
        let (sender, receiver) = mpsc::channel();
        let _ = sender.send(value);
        Self::from_receiver(receiver, abandoned)
    }
}

impl<T> Pending<T> {
    fn from_receiver(receiver: Receiver<T>, abandoned: fn() -> T) -> Self {
        Self {
            receiver,
            abandoned,
            generation: 0,
            latest: None,
        }
    }

    pub(crate) fn stamped(mut self, generation: u64, latest: Arc<AtomicU64>) -> Self {
        self.generation = generation;
        self.latest = Some(latest);
        self
    }

    /// Generation of the search this handle belongs to. Zero for unstamped work.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once a newer search has been issued on the same client.
    pub fn is_current(&self) -> bool {
        match &self.latest {
            Some(latest) => latest.load(Ordering::SeqCst) == self.generation,
            None => true,
        }
    }

    /// Blocks until the outcome is available.
    pub fn wait(self) -> T {
        self.receiver.recv().unwrap_or_else(|_| (self.abandoned)())
    }

    /// Blocks for at most `timeout`. Hands the handle back in `Err` if the
    /// outcome is not ready yet.
    pub fn wait_timeout(self, timeout: Duration) -> Result<T, Self> {
        match self.receiver.recv_timeout(timeout) {
            Ok(value) => Ok(value),
            Err(RecvTimeoutError::Timeout) => Err(self),
            Err(RecvTimeoutError::Disconnected) => Ok((self.abandoned)()),
        }
    }

    /// Non-blocking poll, meant to be called from the thread that owns the
    /// state the outcome will be applied to.
    pub fn try_take(self) -> Result<T, Self> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(value),
            Err(TryRecvError::Empty) => Err(self),
            Err(TryRecvError::Disconnected) => Ok((self.abandoned)()),
        }
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

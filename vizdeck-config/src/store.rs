//! The configuration capability and its write-completion handle.
//!
//! Writes are asynchronous: `set` updates the visible value immediately and
//! returns a `ConfigWrite` that resolves once the value has been persisted.
//! UI code that does not care about the outcome calls
//! [`ConfigWrite::detach`], which drops the handle and ignores any failure.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::error::ConfigError;
use crate::value::ConfigValue;

/// Key-value configuration capability.
///
/// Implemented by `YamlConfigStore` and `MemoryConfigStore`; consumers hold
/// it as `Arc<dyn AppConfiguration>`.
pub trait AppConfiguration: Send + Sync {
    /// Current value for `key`, or `None` if the key has never been set.
    fn get(&self, key: &str) -> Option<ConfigValue>;

    /// Store `value` under `key`.
    ///
    /// A subsequent `get` observes the new value immediately. Persistence
    /// completes in the background and is reported on the returned handle.
    fn set(&self, key: &str, value: ConfigValue) -> ConfigWrite;

    /// Boolean value for `key`, ignoring values of other types.
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Numeric value for `key`, ignoring values of other types.
    fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_number())
    }

    /// String value for `key`, ignoring values of other types.
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str().map(str::to_string))
    }
}

/// Completion handle for a configuration write.
///
/// Await it (it implements `Future`), poll it with [`try_result`], block on
/// it with [`wait`], or give it up with [`detach`].
///
/// [`try_result`]: ConfigWrite::try_result
/// [`wait`]: ConfigWrite::wait
/// [`detach`]: ConfigWrite::detach
#[derive(Debug)]
#[must_use = "await the write or call `detach()` to ignore its outcome"]
pub struct ConfigWrite {
    receiver: oneshot::Receiver<Result<(), ConfigError>>,
}

/// Sending half of a [`ConfigWrite`], held by the store until the write lands.
#[derive(Debug)]
pub struct WriteCompletion {
    sender: oneshot::Sender<Result<(), ConfigError>>,
}

impl ConfigWrite {
    /// Create a pending write and the completion used to resolve it.
    pub fn pending() -> (Self, WriteCompletion) {
        let (sender, receiver) = oneshot::channel();
        (Self { receiver }, WriteCompletion { sender })
    }

    /// A write that has already finished with `result`.
    pub fn completed(result: Result<(), ConfigError>) -> Self {
        let (write, completion) = Self::pending();
        completion.complete(result);
        write
    }

    /// Give up on observing this write.
    ///
    /// The write still runs to completion; success or failure is ignored by
    /// the caller. Stores log persistence failures themselves.
    pub fn detach(self) {}

    /// Non-blocking check. Returns `None` while the write is still running.
    pub fn try_result(&mut self) -> Option<Result<(), ConfigError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(ConfigError::WriteAborted)),
        }
    }

    /// Block the current thread until the write completes.
    ///
    /// Must not be called from inside an async runtime.
    pub fn wait(self) -> Result<(), ConfigError> {
        self.receiver
            .blocking_recv()
            .unwrap_or(Err(ConfigError::WriteAborted))
    }
}

impl Future for ConfigWrite {
    type Output = Result<(), ConfigError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(ConfigError::WriteAborted)))
    }
}

impl WriteCompletion {
    /// Resolve the paired `ConfigWrite`.
    pub fn complete(self, result: Result<(), ConfigError>) {
        // A detached handle has dropped its receiver; nobody is listening.
        let _ = self.sender.send(result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_write_resolves_immediately() {
        let mut write = ConfigWrite::completed(Ok(()));
        assert!(matches!(write.try_result(), Some(Ok(()))));
    }

    #[test]
    fn test_pending_write_reports_empty_until_completed() {
        let (mut write, completion) = ConfigWrite::pending();
        assert!(write.try_result().is_none());
        completion.complete(Err(ConfigError::WriteAborted));
        assert!(matches!(
            write.try_result(),
            Some(Err(ConfigError::WriteAborted))
        ));
    }

    #[test]
    fn test_dropped_completion_aborts_write() {
        let (write, completion) = ConfigWrite::pending();
        drop(completion);
        assert!(matches!(write.wait(), Err(ConfigError::WriteAborted)));
    }

    #[test]
    fn test_completing_detached_write_does_not_panic() {
        let (write, completion) = ConfigWrite::pending();
        write.detach();
        completion.complete(Ok(()));
    }

    #[tokio::test]
    async fn test_write_is_awaitable() {
        let (write, completion) = ConfigWrite::pending();
        std::thread::spawn(move || completion.complete(Ok(())));
        assert!(write.await.is_ok());
    }
}

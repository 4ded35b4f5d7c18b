//! Request-scoped cancellation

use crate::error::{Result, TfplugError};
use std::sync::Arc;
use tokio::sync::watch;

/// Passed as the first argument to every provider, resource and data source call
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    cancelled: watch::Sender<bool>,
}

impl Context {
    pub fn new() -> Self {
        let (cancelled, _) = watch::channel(false);
        Self {
            inner: Arc::new(ContextInner { cancelled }),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.cancelled.borrow()
    }

    /// Errors once the context is cancelled
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TfplugError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Receiver that flips to `true` on cancellation
    pub fn done(&self) -> watch::Receiver<bool> {
        self.inner.cancelled.subscribe()
    }

    pub fn cancel(&self) {
        self.inner.cancelled.send_replace(true);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

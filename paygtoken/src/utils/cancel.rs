//! Cancellation signal for the stateful path.
//!
//! A `CancelHandle` fires the signal; every clone of the matching
//! `CancelSignal` observes it. Collaborator calls are raced against the
//! signal so a cancelled request stops at the next I/O boundary.

use std::future::Future;

use tokio::sync::watch;

use crate::{Error, Result};

/// Sending half. Dropping it without calling `cancel` never fires the signal.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        // send_replace works even when every receiver has been dropped
        self.tx.send_replace(true);
    }
}

/// Receiving half, cheap to clone and pass down.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    rx: Option<watch::Receiver<bool>>,
}

impl CancelSignal {
    /// Create a connected handle/signal pair.
    pub fn pair() -> (CancelHandle, CancelSignal) {
        let (tx, rx) = watch::channel(false);
        (CancelHandle { tx }, CancelSignal { rx: Some(rx) })
    }

    /// A signal that never fires.
    pub fn never() -> Self {
        Self { rx: None }
    }

    pub fn is_cancelled(&self) -> bool {
        self.rx.as_ref().map(|rx| *rx.borrow()).unwrap_or(false)
    }

    /// Resolve once the signal fires. Pending forever for `never()` or when
    /// the handle is dropped unfired.
    pub async fn cancelled(&self) {
        let Some(rx) = &self.rx else {
            return std::future::pending().await;
        };
        let mut rx = rx.clone();
        let fired = rx.wait_for(|fired| *fired).await.is_ok();
        if !fired {
            std::future::pending::<()>().await;
        }
    }

    /// Run `fut` unless the signal fires first.
    pub async fn guard<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(Error::Cancelled),
            out = fut => out,
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::never()
    }
}

// paygtoken/src/service/sequence.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::store::TokenStore;
use crate::types::{Counter, DeviceId};
use crate::utils::CancelSignal;
use crate::{Error, Result};

/// Counter assignment for the stateful path.
///
/// Issuance is serialized per device: `reserve` hands out a lease holding
/// the device's lock, and the lock is released only when the lease is
/// dropped, i.e. after the caller has appended the token. Two requests for
/// the same device therefore never observe the same maximum.
#[derive(Debug, Default)]
pub struct SequenceProvider {
    locks: Mutex<HashMap<DeviceId, Arc<AsyncMutex<()>>>>,
}

/// Exclusive right to issue `counter` for one device.
#[derive(Debug)]
pub struct CounterLease {
    counter: Counter,
    _guard: OwnedMutexGuard<()>,
}

impl CounterLease {
    pub fn counter(&self) -> Counter {
        self.counter
    }
}

impl SequenceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    fn device_lock(&self, device: &DeviceId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // drop locks nobody is waiting on so the map tracks in-flight devices only
        locks.retain(|_, m| Arc::strong_count(m) > 1);
        locks
            .entry(device.clone())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Take the device lock and decide the counter: `requested` when
    /// non-zero, otherwise one past the stored maximum (1 for a new device).
    pub async fn reserve(
        &self,
        store: &dyn TokenStore,
        device: &DeviceId,
        requested: Counter,
        cancel: &CancelSignal,
    ) -> Result<CounterLease> {
        let lock = self.device_lock(device);
        let guard = cancel.guard(async { Ok(lock.lock_owned().await) }).await?;

        let counter = if requested.is_zero() {
            let max = cancel.guard(store.max_counter(device)).await?;
            let next = max.unwrap_or(Counter::ZERO).next().ok_or(Error::CounterExhausted)?;
            log::debug!("assigned counter {} to device {}", next, device);
            next
        } else {
            requested
        };

        Ok(CounterLease {
            counter,
            _guard: guard,
        })
    }

    /// Devices with a lease outstanding or waiting.
    pub fn in_flight(&self) -> usize {
        let locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        locks.values().filter(|m| Arc::strong_count(m) > 1).count()
    }
}

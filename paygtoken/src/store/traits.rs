// paygtoken/src/store/traits.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::model::{DeviceRecord, GeneratedToken};
use crate::types::{Counter, DeviceId};
use crate::{Error, Result};

/// Device lookup, owned by the device-management side of the system.
///
/// Implementations report backend failures as `Error::Directory` with the
/// raw message in `detail`.
#[async_trait]
pub trait DeviceDirectory: Send + Sync {
    /// `Ok(None)` when the identifier is unknown.
    async fn find(&self, device: &DeviceId) -> Result<Option<DeviceRecord>>;
}

/// Persistence for issued tokens.
///
/// Implementations report backend failures as `Error::Store`.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Highest counter stored for the device, `None` if nothing was issued.
    async fn max_counter(&self, device: &DeviceId) -> Result<Option<Counter>>;

    /// Persist a freshly generated token.
    async fn append(&self, token: GeneratedToken) -> Result<()>;

    /// Flag the token issued with `counter` as consumed. Returns `false`
    /// when no such token exists or it was already used. The default
    /// implementation reports the operation as unsupported so read/append
    /// only stores keep working.
    async fn mark_used(
        &self,
        _device: &DeviceId,
        _counter: Counter,
        _at: DateTime<Utc>,
    ) -> Result<bool> {
        Err(Error::Store {
            detail: "mark_used not supported by this store".to_string(),
        })
    }
}

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the golden-vector fixture and the in-memory
//! collaborator setup so tests across the crate and tests/ directory can
//! reuse the same logic.
#![allow(dead_code)]

use crate::types::Secret;

/// 16-byte key used by the regression fixture.
#[doc(hidden)]
pub const GOLDEN_SECRET_HEX: &str = "0123456789ABCDEF0123456789ABCDEF";
#[doc(hidden)]
pub const GOLDEN_COMMAND: &str = "unlock_relative";
#[doc(hidden)]
pub const GOLDEN_PAYLOAD: &str = "30";
#[doc(hidden)]
pub const GOLDEN_COUNTER: u32 = 42;
/// Regression value for the fixture above; must never change.
#[doc(hidden)]
pub const GOLDEN_PACKED: u64 = 126_617_558;
#[doc(hidden)]
pub const GOLDEN_TOKEN: &str = "126 617 558";

#[doc(hidden)]
pub fn golden_secret() -> Secret {
    Secret::from_bytes(vec![
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd,
        0xef,
    ])
}

#[cfg(feature = "async")]
pub use self::memory::*;

#[cfg(feature = "async")]
mod memory {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use crate::service::{TokenGenerationService, TokenServiceBuilder};
    use crate::store::{DeviceRecord, MemoryDeviceDirectory, MemoryTokenStore};
    use crate::types::Secret;
    use crate::Result;

    /// Build a directory pre-seeded with the given devices.
    #[doc(hidden)]
    pub async fn directory_with(devices: Vec<(&str, Option<Secret>)>) -> Arc<MemoryDeviceDirectory> {
        let dir = MemoryDeviceDirectory::new();
        for (id, secret) in devices {
            let mut record = DeviceRecord::new(id);
            record.secret = secret;
            dir.insert(record).await;
        }
        Arc::new(dir)
    }

    /// Convenience: a service over the given memory collaborators with the
    /// clock pinned to `now`.
    #[doc(hidden)]
    pub fn service_over(
        directory: Arc<MemoryDeviceDirectory>,
        store: Arc<MemoryTokenStore>,
        now: DateTime<Utc>,
    ) -> Result<TokenGenerationService> {
        TokenServiceBuilder::new()
            .with_directory(directory)
            .with_store(store)
            .with_clock(Arc::new(move || now))
            .build()
    }
}

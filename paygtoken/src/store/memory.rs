// paygtoken/src/store/memory.rs

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::model::{DeviceRecord, GeneratedToken};
use super::traits::{DeviceDirectory, TokenStore};
use crate::types::{Counter, DeviceId};
use crate::{Error, Result};

/// In-memory device directory for tests and embedding. Failure injection
/// lets tests drive the infrastructure error path.
#[derive(Debug, Default)]
pub struct MemoryDeviceDirectory {
    devices: RwLock<HashMap<DeviceId, DeviceRecord>>,
    unavailable: AtomicBool,
}

impl MemoryDeviceDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: DeviceRecord) {
        self.devices.write().await.insert(record.id.clone(), record);
    }

    /// Make every subsequent lookup fail (for tests).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }
}

#[async_trait]
impl DeviceDirectory for MemoryDeviceDirectory {
    async fn find(&self, device: &DeviceId) -> Result<Option<DeviceRecord>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Directory {
                detail: format!("memory directory offline while looking up {}", device),
            });
        }
        Ok(self.devices.read().await.get(device).cloned())
    }
}

/// In-memory token store. Each call can be delayed by a fixed latency so
/// tests can widen the window between counter read and append.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<HashMap<DeviceId, Vec<GeneratedToken>>>,
    latency: Option<Duration>,
    unavailable: AtomicBool,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    /// Make every subsequent call fail (for tests).
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Snapshot of tokens issued for a device, in append order.
    pub async fn tokens_for(&self, device: &DeviceId) -> Vec<GeneratedToken> {
        self.tokens
            .read()
            .await
            .get(device)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn len(&self) -> usize {
        self.tokens.read().await.values().map(Vec::len).sum()
    }

    async fn enter(&self, op: &str) -> Result<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(Error::Store {
                detail: format!("memory store offline during {}", op),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn max_counter(&self, device: &DeviceId) -> Result<Option<Counter>> {
        self.enter("max_counter").await?;
        Ok(self
            .tokens
            .read()
            .await
            .get(device)
            .and_then(|ts| ts.iter().map(|t| t.counter).max()))
    }

    async fn append(&self, token: GeneratedToken) -> Result<()> {
        self.enter("append").await?;
        self.tokens
            .write()
            .await
            .entry(token.device.clone())
            .or_default()
            .push(token);
        Ok(())
    }

    async fn mark_used(&self, device: &DeviceId, counter: Counter, at: DateTime<Utc>) -> Result<bool> {
        self.enter("mark_used").await?;
        let mut tokens = self.tokens.write().await;
        let marked = tokens
            .get_mut(device)
            .and_then(|ts| ts.iter_mut().find(|t| t.counter == counter))
            .map(|t| t.mark_used(at))
            .unwrap_or(false);
        Ok(marked)
    }
}

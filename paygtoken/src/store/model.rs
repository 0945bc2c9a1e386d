// paygtoken/src/store/model.rs

use chrono::{DateTime, Utc};

use crate::types::{Counter, DeviceId, Secret};

/// What the device directory knows about a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub id: DeviceId,
    /// Absent until a key has been provisioned for the device.
    pub secret: Option<Secret>,
}

impl DeviceRecord {
    pub fn new(id: impl Into<DeviceId>) -> Self {
        Self {
            id: id.into(),
            secret: None,
        }
    }

    pub fn with_secret(mut self, secret: Secret) -> Self {
        self.secret = Some(secret);
        self
    }
}

/// Whether a token was tracked server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GenerationMode {
    Stateless,
    Stateful,
}

/// Persisted record of a stateful generation. Created once; afterwards only
/// the `used`/`used_at` pair changes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedToken {
    pub device: DeviceId,
    pub encoded_value: String,
    /// Canonical catalog name, aliases resolved.
    pub command: String,
    pub payload: Option<String>,
    pub counter: Counter,
    pub mode: GenerationMode,
    pub encoding: Option<String>,
    pub days_credit: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub used: bool,
    pub used_at: Option<DateTime<Utc>>,
}

impl GeneratedToken {
    /// Flag the token as entered on the device. Returns `false` if it was
    /// already marked.
    pub fn mark_used(&mut self, at: DateTime<Utc>) -> bool {
        if self.used {
            return false;
        }
        self.used = true;
        self.used_at = Some(at);
        true
    }

    pub fn is_valid_at(&self, at: DateTime<Utc>) -> bool {
        at >= self.valid_from && self.valid_until.map(|until| at < until).unwrap_or(true)
    }
}

//! Service-level configuration

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::constants::DEFAULT_VALIDITY_GRACE_DAYS;

/// Time source for `created_at`/`valid_from`. Injected so tests can pin it.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Days added to an `unlock_relative` credit to get `valid_until`.
    pub validity_grace_days: i64,
}

impl ServiceConfig {
    /// Validity window of a relative unlock of `days`, or `None` when it
    /// cannot be represented.
    pub fn relative_validity(&self, days: u32) -> Option<Duration> {
        Duration::try_days(i64::from(days).checked_add(self.validity_grace_days)?)
    }

    /// End of the validity window starting at `from`. `None` when the
    /// window ends past the last representable instant.
    pub fn relative_valid_until(&self, from: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
        from.checked_add_signed(self.relative_validity(days)?)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            validity_grace_days: DEFAULT_VALIDITY_GRACE_DAYS,
        }
    }
}

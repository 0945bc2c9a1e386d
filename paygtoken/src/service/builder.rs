// paygtoken/src/service/builder.rs

use std::sync::Arc;

use super::config::{Clock, ServiceConfig, system_clock};
use super::generator::TokenGenerationService;
use crate::store::{DeviceDirectory, TokenStore};
use crate::{Error, Result};

/// Helper to construct a `TokenGenerationService` from its collaborators.
#[derive(Default)]
pub struct TokenServiceBuilder {
    directory: Option<Arc<dyn DeviceDirectory>>,
    store: Option<Arc<dyn TokenStore>>,
    config: ServiceConfig,
    clock: Option<Clock>,
}

impl TokenServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directory(mut self, directory: Arc<dyn DeviceDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the time source (defaults to `Utc::now`).
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Both collaborators are required; a missing one is reported as the
    /// matching infrastructure error.
    pub fn build(self) -> Result<TokenGenerationService> {
        let directory = self.directory.ok_or_else(|| Error::Directory {
            detail: "no device directory configured".to_string(),
        })?;
        let store = self.store.ok_or_else(|| Error::Store {
            detail: "no token store configured".to_string(),
        })?;
        Ok(TokenGenerationService::from_parts(
            directory,
            store,
            self.config,
            self.clock.unwrap_or_else(system_clock),
        ))
    }
}

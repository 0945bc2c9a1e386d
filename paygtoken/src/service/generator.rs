// paygtoken/src/service/generator.rs

use std::sync::Arc;

use super::config::{Clock, ServiceConfig};
use super::request::{TokenGenerationRequest, TokenGenerationResponse};
use super::sequence::SequenceProvider;
use super::stateless;
use crate::error::ErrorKind;
use crate::protocol::catalog::{self, CommandKind};
use crate::protocol::codec::encode_token;
use crate::protocol::encoding::TokenEncoding;
use crate::protocol::payload::encode_payload;
use crate::store::{DeviceDirectory, GeneratedToken, GenerationMode, TokenStore};
use crate::types::{Counter, DeviceId, Secret};
use crate::utils::CancelSignal;
use crate::{Error, Result};

/// Orchestrates validation, secret resolution, counter assignment,
/// signing and persistence. Every failure comes back as an error response.
pub struct TokenGenerationService {
    directory: Arc<dyn DeviceDirectory>,
    store: Arc<dyn TokenStore>,
    sequences: SequenceProvider,
    config: ServiceConfig,
    clock: Clock,
}

impl TokenGenerationService {
    pub(crate) fn from_parts(
        directory: Arc<dyn DeviceDirectory>,
        store: Arc<dyn TokenStore>,
        config: ServiceConfig,
        clock: Clock,
    ) -> Self {
        Self {
            directory,
            store,
            sequences: SequenceProvider::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Stateless generation; see [`stateless::generate_stateless`].
    pub fn generate_stateless(&self, request: &TokenGenerationRequest) -> TokenGenerationResponse {
        stateless::generate_stateless(request)
    }

    /// Stateful generation: the device must be known, the counter is
    /// assigned when the request carries `0`, and the token is persisted.
    pub async fn generate(
        &self,
        request: &TokenGenerationRequest,
        cancel: &CancelSignal,
    ) -> TokenGenerationResponse {
        log::info!(
            "generating stateful token for device {} with command {}",
            request.device,
            request.command
        );

        match self.try_generate(request, cancel).await {
            Ok(record) => {
                log::info!(
                    "stateful token generated for device {}, sequence {}",
                    record.device,
                    record.counter
                );
                TokenGenerationResponse::ok(record.encoded_value, record.counter)
            }
            Err(err) => {
                match err.kind() {
                    ErrorKind::Infrastructure => log::error!(
                        "stateful token generation failed for device {}: {} ({})",
                        request.device,
                        err,
                        err.detail().unwrap_or("no detail")
                    ),
                    _ => log::warn!(
                        "stateful token generation rejected for device {}: {}",
                        request.device,
                        err
                    ),
                }
                TokenGenerationResponse::error(&err, request.counter())
            }
        }
    }

    async fn try_generate(
        &self,
        request: &TokenGenerationRequest,
        cancel: &CancelSignal,
    ) -> Result<GeneratedToken> {
        let device_id = DeviceId::new(request.device.as_str());
        let device = cancel
            .guard(self.directory.find(&device_id))
            .await?
            .ok_or(Error::DeviceNotFound)?;

        let def = catalog::lookup(&request.command)?;
        let payload = encode_payload(def, request.payload.as_deref())?;

        let secret = match request.secret_hex() {
            Some(hex) => Secret::from_hex(hex)?,
            None => device
                .secret
                .filter(|s| !s.is_empty())
                .ok_or(Error::SecretNotConfigured)?,
        };
        let encoding = TokenEncoding::from_spec(request.encoding.as_deref());

        // held until the record is appended
        let lease = self
            .sequences
            .reserve(self.store.as_ref(), &device_id, request.counter(), cancel)
            .await?;
        let token = encode_token(def, payload, lease.counter(), &secret, &encoding)?;

        let now = (self.clock)();
        let days_credit = (def.kind == CommandKind::UnlockRelative).then_some(payload);
        let valid_until = days_credit.and_then(|days| {
            let until = self.config.relative_valid_until(now, days);
            if until.is_none() {
                log::debug!(
                    "validity of {} days for device {} is past the calendar range, leaving it open",
                    days,
                    device_id
                );
            }
            until
        });
        let record = GeneratedToken {
            device: device_id,
            encoded_value: token.text,
            command: def.name.to_string(),
            payload: request.payload.clone(),
            counter: token.counter,
            mode: GenerationMode::Stateful,
            encoding: request.encoding.clone(),
            days_credit,
            created_at: now,
            valid_from: now,
            valid_until,
            used: false,
            used_at: None,
        };

        cancel.guard(self.store.append(record.clone())).await?;
        drop(lease);
        Ok(record)
    }

    /// Record that the token issued with `counter` was entered on the device.
    pub async fn mark_used(
        &self,
        device: &DeviceId,
        counter: Counter,
        cancel: &CancelSignal,
    ) -> Result<bool> {
        let at = (self.clock)();
        cancel.guard(self.store.mark_used(device, counter, at)).await
    }
}

// paygtoken/src/service/request.rs

use crate::error::{Error, ErrorKind};
use crate::types::Counter;

/// Token generation request as received from the API layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TokenGenerationRequest {
    /// Device serial/identifier
    pub device: String,
    /// Catalog command name, case-insensitive
    pub command: String,
    pub payload: Option<String>,
    /// `0` asks the stateful path to assign the next counter
    pub sequence_number: u32,
    /// Hex-encoded key; mandatory for stateless generation
    pub secret: Option<String>,
    pub encoding: Option<String>,
}

impl TokenGenerationRequest {
    pub fn new(device: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn sequence_number(mut self, n: u32) -> Self {
        self.sequence_number = n;
        self
    }

    pub fn secret(mut self, hex: impl Into<String>) -> Self {
        self.secret = Some(hex.into());
        self
    }

    pub fn encoding(mut self, spec: impl Into<String>) -> Self {
        self.encoding = Some(spec.into());
        self
    }

    pub(crate) fn counter(&self) -> Counter {
        Counter::new(self.sequence_number)
    }

    /// Caller-supplied secret, `None` when absent or blank.
    pub(crate) fn secret_hex(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResponseStatus {
    Ok,
    Error,
}

/// Structured outcome of a generation call. `token` is set iff the status
/// is `Ok`, `error` iff it is `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenGenerationResponse {
    pub status: ResponseStatus,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub token: Option<String>,
    /// Counter actually used (the request's value on failure)
    pub sequence_number: u32,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub error: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub error_kind: Option<ErrorKind>,
}

impl TokenGenerationResponse {
    pub fn ok(token: String, counter: Counter) -> Self {
        Self {
            status: ResponseStatus::Ok,
            token: Some(token),
            sequence_number: counter.as_u32(),
            error: None,
            error_kind: None,
        }
    }

    pub fn error(err: &Error, counter: Counter) -> Self {
        Self {
            status: ResponseStatus::Error,
            token: None,
            sequence_number: counter.as_u32(),
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ResponseStatus::Ok
    }
}

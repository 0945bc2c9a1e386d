// paygtoken/src/error.rs

use thiserror::Error;

/// 共通エラー型
///
/// Infrastructure variants keep the raw collaborator message in `detail`
/// for logging only; their `Display` text is fixed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Device secret is required for stateless token generation")]
    SecretRequired,

    #[error("Invalid device secret: {0}")]
    InvalidSecret(String),

    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    #[error("Invalid payload for command {command}: {reason}")]
    InvalidPayload { command: String, reason: String },

    #[error("Device not found")]
    DeviceNotFound,

    #[error("Device secret not configured")]
    SecretNotConfigured,

    #[error("Sequence counter exhausted for device")]
    CounterExhausted,

    #[error("Device directory unavailable")]
    Directory { detail: String },

    #[error("Token store unavailable")]
    Store { detail: String },

    #[error("Request cancelled")]
    Cancelled,
}

/// Error classification exposed to callers of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request itself is wrong; retrying it unchanged will not help.
    InputValidation,
    NotFound,
    Configuration,
    Infrastructure,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SecretRequired
            | Self::InvalidSecret(_)
            | Self::UnsupportedCommand(_)
            | Self::InvalidPayload { .. } => ErrorKind::InputValidation,
            Self::DeviceNotFound => ErrorKind::NotFound,
            Self::SecretNotConfigured => ErrorKind::Configuration,
            Self::CounterExhausted
            | Self::Directory { .. }
            | Self::Store { .. }
            | Self::Cancelled => ErrorKind::Infrastructure,
        }
    }

    pub(crate) fn invalid_payload(command: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPayload {
            command: command.to_string(),
            reason: reason.into(),
        }
    }

    /// Raw collaborator message, if this is an infrastructure failure.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Directory { detail } | Self::Store { detail } => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

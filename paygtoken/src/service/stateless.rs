// paygtoken/src/service/stateless.rs

use super::request::{TokenGenerationRequest, TokenGenerationResponse};
use crate::protocol::codec::{EncodedToken, generate_token};
use crate::types::Secret;
use crate::{Error, Result};

/// Stateless generation: the caller supplies secret and counter, nothing
/// is persisted. The counter is used verbatim, zero included.
pub fn generate_stateless(request: &TokenGenerationRequest) -> TokenGenerationResponse {
    log::info!(
        "generating stateless token for device {} with command {}",
        request.device,
        request.command
    );

    match try_generate(request) {
        Ok(token) => {
            log::info!(
                "stateless token generated for device {}, sequence {}",
                request.device,
                token.counter
            );
            TokenGenerationResponse::ok(token.text, token.counter)
        }
        Err(err) => {
            log::warn!(
                "stateless token generation failed for device {}: {}",
                request.device,
                err
            );
            TokenGenerationResponse::error(&err, request.counter())
        }
    }
}

fn try_generate(request: &TokenGenerationRequest) -> Result<EncodedToken> {
    let secret = match request.secret_hex() {
        Some(hex) => Secret::from_hex(hex)?,
        None => return Err(Error::SecretRequired),
    };
    generate_token(
        &request.command,
        request.payload.as_deref(),
        request.counter(),
        &secret,
        request.encoding.as_deref(),
    )
}

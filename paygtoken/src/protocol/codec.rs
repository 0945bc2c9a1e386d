// paygtoken/src/protocol/codec.rs

use super::catalog::{self, CommandDefinition};
use super::encoding::TokenEncoding;
use super::packer;
use super::payload::encode_payload;
use super::signer;
use crate::types::{Counter, PackedToken, Secret, Signature};
use crate::{Error, Result};

/// Result of running the signing pipeline once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedToken {
    pub command: &'static CommandDefinition,
    pub payload: u32,
    pub counter: Counter,
    pub signature: Signature,
    pub packed: PackedToken,
    pub text: String,
}

/// Sign, pack and render a token for an already-validated payload.
pub fn encode_token(
    def: &'static CommandDefinition,
    payload: u32,
    counter: Counter,
    secret: &Secret,
    encoding: &TokenEncoding,
) -> Result<EncodedToken> {
    if secret.is_empty() {
        return Err(Error::SecretRequired);
    }
    let signature = signer::sign(secret, def.opcode, payload, counter)?;
    let packed = packer::pack(def.opcode, payload, signature);
    let text = encoding.encode(packed);
    Ok(EncodedToken {
        command: def,
        payload,
        counter,
        signature,
        packed,
        text,
    })
}

/// Full pure pipeline: catalog lookup, payload validation, signing,
/// packing and rendering. No I/O; safe to call from any thread.
pub fn generate_token(
    command: &str,
    payload: Option<&str>,
    counter: Counter,
    secret: &Secret,
    encoding: Option<&str>,
) -> Result<EncodedToken> {
    let def = catalog::lookup(command)?;
    let payload = encode_payload(def, payload)?;
    encode_token(def, payload, counter, secret, &TokenEncoding::from_spec(encoding))
}

/// Check a packed token against the secret and the counter it was issued
/// for, the way a controller does after keypad entry.
pub fn verify_token(token: PackedToken, counter: Counter, secret: &Secret) -> Result<bool> {
    let fields = packer::unpack(token);
    let Ok(payload) = u32::try_from(fields.payload) else {
        return Ok(false);
    };
    let expected = signer::sign(secret, fields.opcode, payload, counter)?;
    Ok(expected == fields.signature)
}

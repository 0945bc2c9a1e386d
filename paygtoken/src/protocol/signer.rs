// paygtoken/src/protocol/signer.rs

use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::record::SignedRecord;
use crate::types::{Counter, Opcode, Secret, Signature};
use crate::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

/// SHA-1 digest length in bytes.
pub const DIGEST_LEN: usize = 20;

/// RFC 4226 dynamic truncation: pick 4 bytes at the offset named by the
/// low nibble of the last byte and clear the top bit.
pub fn dynamic_truncate(hash: &[u8; DIGEST_LEN]) -> u32 {
    let offset = (hash[DIGEST_LEN - 1] & 0x0f) as usize;
    ((hash[offset] as u32 & 0x7f) << 24)
        | ((hash[offset + 1] as u32 & 0xff) << 16)
        | ((hash[offset + 2] as u32 & 0xff) << 8)
        | (hash[offset + 3] as u32 & 0xff)
}

/// HMAC-SHA1 of the record keyed by the device secret.
pub fn hmac_record(secret: &Secret, record: &SignedRecord) -> Result<[u8; DIGEST_LEN]> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes())
        .map_err(|e| Error::InvalidSecret(e.to_string()))?;
    mac.update(record.as_bytes());
    let digest = mac.finalize().into_bytes();

    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Sign `(opcode, payload, counter)` and reduce to the 19-bit signature.
pub fn sign(secret: &Secret, opcode: Opcode, payload: u32, counter: Counter) -> Result<Signature> {
    let record = SignedRecord::new(opcode, payload, counter);
    let hash = hmac_record(secret, &record)?;
    let signature = Signature::from_code(dynamic_truncate(&hash));
    log::trace!(
        "signed record {} -> signature {}",
        record.to_hex(),
        signature
    );
    Ok(signature)
}

// paygtoken/src/constants.rs
//! Protocol constants shared by the signer, packer and encoder.
//!
//! These values are burned into deployed controllers; changing any of them
//! produces tokens the hardware rejects.

/// Width of the opcode field in the standard layout.
pub const CMD_BITS: u32 = 3;

/// Width of the truncated HMAC signature.
pub const HMAC_BITS: u32 = 19;

/// Escape marker written into the opcode field for extended commands
/// (`2^CMD_BITS - 1`).
pub const CMD_EXT: u32 = (1 << CMD_BITS) - 1;

/// Width of the extended opcode field that follows the escape marker.
pub const CMD_EXT_BITS: u32 = 3;

/// Signature values are always below this bound.
pub const SIGNATURE_MODULUS: u32 = 1 << HMAC_BITS;

/// Size of the signed record: opcode, payload and counter as LE u32.
pub const RECORD_LEN: usize = 12;

/// Digits per group when rendering decimal tokens.
pub const DEFAULT_GROUP_SIZE: usize = 3;

/// Days added on top of the relative credit when computing `valid_until`.
pub const DEFAULT_VALIDITY_GRACE_DAYS: i64 = 30;

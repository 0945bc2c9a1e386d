// paygtoken/src/types.rs

use derive_more::{Display, From};
use std::fmt;

use crate::{Error, Result};

/// Device identifier (usually the controller serial number)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DeviceId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Device secret - HMAC key bytes. `Debug` never prints the key material.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Vec<u8>);

impl Secret {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Parse a hex-encoded key. Separators (`-` and whitespace) are
    /// ignored; an empty string yields `SecretRequired`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let cleaned: String = s
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return Err(Error::SecretRequired);
        }
        let bytes = crate::utils::parse_hex(&cleaned).map_err(Error::InvalidSecret)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(<{} bytes>)", self.0.len())
    }
}

/// Anti-replay sequence counter (u32)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Display, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Counter(u32);

impl Counter {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Next counter value, or `None` once the 32-bit space is used up.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Command opcode as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct Opcode(u32);

impl Opcode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Opcodes below the escape marker fit the compact 3-bit field.
    pub fn is_extended(&self) -> bool {
        self.0 >= crate::constants::CMD_EXT
    }

    pub fn to_le_bytes(&self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Truncated HMAC signature, always `< 2^HMAC_BITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct Signature(u32);

impl Signature {
    /// Reduce a 31-bit dynamic-truncation code to the signature width.
    pub fn from_code(code: u32) -> Self {
        Self(code % crate::constants::SIGNATURE_MODULUS)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

/// Packed token value before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
pub struct PackedToken(u64);

impl PackedToken {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

// paygtoken/src/protocol/record.rs

use crate::constants::RECORD_LEN;
use crate::types::{Counter, Opcode};

/// The 12-byte message fed to the HMAC.
/// Format: [Opcode(4, LE)] [Payload(4, LE)] [Counter(4, LE)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedRecord([u8; RECORD_LEN]);

impl SignedRecord {
    pub fn new(opcode: Opcode, payload: u32, counter: Counter) -> Self {
        let mut buf = [0u8; RECORD_LEN];
        buf[0..4].copy_from_slice(&opcode.to_le_bytes());
        buf[4..8].copy_from_slice(&payload.to_le_bytes());
        buf[8..12].copy_from_slice(&counter.to_le_bytes());
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

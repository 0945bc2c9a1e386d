// paygtoken/src/protocol/packer.rs

use crate::constants::{CMD_BITS, CMD_EXT, CMD_EXT_BITS, HMAC_BITS};
use crate::types::{Opcode, PackedToken, Signature};

const SIGNATURE_MASK: u64 = (1 << HMAC_BITS) - 1;
const CMD_MASK: u64 = (1 << CMD_BITS) - 1;
const CMD_EXT_MASK: u64 = (1 << CMD_EXT_BITS) - 1;

/// Bit layout selected by the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `payload | opcode(3) | signature(19)`
    Standard,
    /// `payload | opcode-7 (3) | 0b111 | signature(19)`
    Extended,
}

impl Layout {
    pub fn for_opcode(opcode: Opcode) -> Self {
        if opcode.is_extended() {
            Self::Extended
        } else {
            Self::Standard
        }
    }

    /// Bit offset of the payload field.
    pub fn payload_shift(&self) -> u32 {
        match self {
            Self::Standard => CMD_BITS + HMAC_BITS,
            Self::Extended => CMD_EXT_BITS + CMD_BITS + HMAC_BITS,
        }
    }
}

/// Fields recovered from a packed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackedToken {
    pub layout: Layout,
    pub opcode: Opcode,
    pub payload: u64,
    pub signature: Signature,
}

/// Combine opcode, payload and signature into one integer.
///
/// Payloads wider than the remaining budget are not masked: whatever the
/// caller passes is shifted into place.
pub fn pack(opcode: Opcode, payload: u32, signature: Signature) -> PackedToken {
    let payload = payload as u64;
    let sig = signature.as_u32() as u64 & SIGNATURE_MASK;
    let op = opcode.as_u32() as u64;
    let ext = CMD_EXT as u64;

    let value = match Layout::for_opcode(opcode) {
        Layout::Standard => {
            (payload << (CMD_BITS + HMAC_BITS)) | (op << HMAC_BITS) | sig
        }
        Layout::Extended => {
            (payload << (CMD_EXT_BITS + CMD_BITS + HMAC_BITS))
                | ((op - ext) << (CMD_BITS + HMAC_BITS))
                | (ext << HMAC_BITS)
                | sig
        }
    };
    PackedToken::new(value)
}

/// Split a packed token back into its fields.
pub fn unpack(token: PackedToken) -> UnpackedToken {
    let v = token.value();
    let signature = Signature::from_code((v & SIGNATURE_MASK) as u32);
    let cmd = (v >> HMAC_BITS) & CMD_MASK;

    if cmd < CMD_EXT as u64 {
        UnpackedToken {
            layout: Layout::Standard,
            opcode: Opcode::new(cmd as u32),
            payload: v >> Layout::Standard.payload_shift(),
            signature,
        }
    } else {
        let ext = (v >> (CMD_BITS + HMAC_BITS)) & CMD_EXT_MASK;
        UnpackedToken {
            layout: Layout::Extended,
            opcode: Opcode::new(CMD_EXT + ext as u32),
            payload: v >> Layout::Extended.payload_shift(),
            signature,
        }
    }
}

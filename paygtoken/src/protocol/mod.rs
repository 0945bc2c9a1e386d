// paygtoken/src/protocol/mod.rs

pub mod catalog;
pub mod codec;
pub mod encoding;
pub mod packer;
pub mod payload;
pub mod record;
pub mod signer;

pub use catalog::{CommandDefinition, CommandKind, PayloadRule};
pub use codec::{EncodedToken, encode_token, generate_token, verify_token};
pub use encoding::{EncodingSpec, TokenEncoding, decode_default, encode_default};
pub use packer::{Layout, UnpackedToken, pack, unpack};
pub use payload::encode_payload;
pub use record::SignedRecord;
pub use signer::sign;

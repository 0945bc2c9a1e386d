// paygtoken/src/lib.rs

//! paygtoken
//!
//! Unlock-token generation for pay-as-you-go solar controllers: a keyed
//! HMAC-SHA1 signature over `(opcode, payload, counter)`, bit-packed with
//! the command and payload and rendered for keypad entry.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod service;
pub mod store;
pub mod test_support;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

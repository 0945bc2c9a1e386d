//! Small helpers used across the crate: hex conversion for secrets and
//! records, and the cancellation signal threaded through collaborator I/O.

#[cfg(feature = "async")]
pub mod cancel;
pub mod hex;

#[cfg(feature = "async")]
pub use cancel::{CancelHandle, CancelSignal};
pub use hex::*;

// paygtoken/src/prelude.rs

pub use crate::protocol::{CommandKind, EncodedToken, TokenEncoding, generate_token, verify_token};
pub use crate::service::{
    ResponseStatus, ServiceConfig, TokenGenerationRequest, TokenGenerationResponse,
    generate_stateless,
};
#[cfg(feature = "async")]
pub use crate::service::{TokenGenerationService, TokenServiceBuilder};
#[cfg(feature = "async")]
pub use crate::store::{DeviceDirectory, TokenStore};
pub use crate::store::{DeviceRecord, GeneratedToken, GenerationMode};
#[cfg(feature = "async")]
pub use crate::utils::{CancelHandle, CancelSignal};
pub use crate::{Counter, DeviceId, Error, ErrorKind, Opcode, PackedToken, Result, Secret};

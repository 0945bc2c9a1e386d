// paygtoken/src/store/mod.rs

#[cfg(feature = "async")]
pub mod memory;
pub mod model;
#[cfg(feature = "async")]
pub mod traits;

#[cfg(feature = "async")]
pub use memory::{MemoryDeviceDirectory, MemoryTokenStore};
pub use model::{DeviceRecord, GeneratedToken, GenerationMode};
#[cfg(feature = "async")]
pub use traits::{DeviceDirectory, TokenStore};

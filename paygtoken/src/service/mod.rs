// paygtoken/src/service/mod.rs

#[cfg(feature = "async")]
pub mod builder;
pub mod config;
#[cfg(feature = "async")]
pub mod generator;
pub mod request;
#[cfg(feature = "async")]
pub mod sequence;
pub mod stateless;

#[cfg(feature = "async")]
pub use builder::TokenServiceBuilder;
pub use config::{Clock, ServiceConfig};
#[cfg(feature = "async")]
pub use generator::TokenGenerationService;
pub use request::{ResponseStatus, TokenGenerationRequest, TokenGenerationResponse};
#[cfg(feature = "async")]
pub use sequence::{CounterLease, SequenceProvider};
pub use stateless::generate_stateless;

pub mod demo;
pub mod error;
pub mod gateway;
pub mod types;

pub use error::GatewayError;
pub use gateway::{AiGateway, Assistant, Availability, ServiceStatus};
pub use types::*;

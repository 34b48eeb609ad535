//! Core abstractions: the generic registry, service seams and error types

pub mod error;
pub mod registry;
pub mod service;

pub use error::{ConfigError, CrmError, CrmResult, RegistryError, RegistryResult, RequestError};
pub use registry::{Registry, Resource, UpdateOutcome};
pub use service::{BookingService, ShopService};

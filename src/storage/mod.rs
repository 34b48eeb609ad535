//! Storage backends
//!
//! Only an in-memory backend exists; persistence is an explicit non-goal.

pub mod in_memory;

pub use in_memory::{InMemoryBookingService, InMemoryShopService};

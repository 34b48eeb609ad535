//! # CRM-RS
//!
//! An in-memory resource-registry REST service: a customer/order/product
//! shop surface with nested containment (Customer → Order → Product) plus a
//! flat product catalog, and an unrelated flat booking collection.
//!
//! One generic [`Registry`](core::Registry) backs every map-keyed
//! collection: identifiers are assigned server-side from a monotonically
//! increasing counter and never reused, and listing returns entities in
//! insertion order. The booking store is an ordered sequence with
//! linear-scan lookup and client-supplied string ids.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crm::prelude::*;
//!
//! ServerBuilder::new()
//!     .with_shop_service(InMemoryShopService::with_demo_data())
//!     .with_booking_service(InMemoryBookingService::new())
//!     .serve("127.0.0.1:8181")
//!     .await?;
//! ```
//!
//! Stores are explicit, constructed dependencies handed to the builder at
//! startup; handlers stay thin and translate service outcomes to status
//! codes (NotFound → 404, Conflict → 409, Unchanged → 304, malformed
//! numeric id → 400).

pub mod config;
pub mod core;
pub mod model;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{CrmError, CrmResult, RegistryError, RequestError},
        registry::{Registry, Resource, UpdateOutcome},
        service::{BookingService, ShopService},
    };

    // === Model ===
    pub use crate::model::{Booking, Customer, Order, Product};

    // === Storage ===
    pub use crate::storage::{InMemoryBookingService, InMemoryShopService};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        routing::{delete, get, post, put},
    };
}

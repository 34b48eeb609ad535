//! Domain entities held by the registries
//!
//! The shop side is a containment hierarchy (Customer → Order → Product)
//! plus a flat product catalog; bookings are an unrelated flat collection.
//! Identifier counters are seeded at fixed starting values so the demo data
//! and the assignment sequence are predictable.

pub mod booking;
pub mod customer;
pub mod order;
pub mod product;

pub use booking::Booking;
pub use customer::Customer;
pub use order::Order;
pub use product::Product;

/// Starting value of the customer id counter; the demo customer takes it.
pub const CUSTOMER_ID_SEED: u64 = 123;

/// Starting value of each customer's order id counter.
pub const ORDER_ID_SEED: u64 = 223;

/// Starting value of the catalog product id counter.
pub const PRODUCT_ID_SEED: u64 = 323;

/// Starting value of an order's contained product registry counter.
///
/// Products copied into an order keep their catalog id, so this counter only
/// anchors the registry; it never assigns.
pub const ORDER_PRODUCT_ID_SEED: u64 = 423;

//! Service traits decoupling the HTTP surface from storage
//!
//! Handlers only see these traits; the registries behind them are explicit,
//! constructed dependencies injected at startup rather than state embedded
//! in the request-handling layer.

use crate::core::error::CrmResult;
use crate::core::registry::UpdateOutcome;
use crate::model::{Booking, Customer, Order, Product};
use async_trait::async_trait;

/// Service trait for the shop surface: customers, their orders, the
/// products inside an order, and the flat product catalog.
#[async_trait]
pub trait ShopService: Send + Sync {
    // === Customers ===

    async fn list_customers(&self) -> CrmResult<Vec<Customer>>;

    async fn get_customer(&self, id: u64) -> CrmResult<Customer>;

    /// Insert with a server-assigned id; returns the stored entity.
    async fn add_customer(&self, customer: Customer) -> CrmResult<Customer>;

    /// In-place replace keyed by the payload's id.
    async fn update_customer(&self, customer: Customer) -> CrmResult<UpdateOutcome>;

    /// Removes only the customer's own registry entry; contained orders are
    /// not pruned anywhere else (no cascading).
    async fn delete_customer(&self, id: u64) -> CrmResult<()>;

    // === Orders within a customer ===

    async fn list_orders(&self, customer_id: u64) -> CrmResult<Vec<Order>>;

    async fn get_order(&self, customer_id: u64, order_id: u64) -> CrmResult<Order>;

    async fn add_order(&self, customer_id: u64, order: Order) -> CrmResult<Order>;

    async fn delete_order(&self, customer_id: u64, order_id: u64) -> CrmResult<()>;

    // === Products within an order ===

    async fn list_order_products(&self, customer_id: u64, order_id: u64)
    -> CrmResult<Vec<Product>>;

    async fn get_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<Product>;

    /// Copy the catalog product with `product_id` into the order, bumping
    /// its per-order quantity and the order total.
    async fn add_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<()>;

    async fn delete_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<()>;

    // === Product catalog ===

    async fn list_products(&self) -> CrmResult<Vec<Product>>;

    async fn get_product(&self, id: u64) -> CrmResult<Product>;

    async fn add_product(&self, product: Product) -> CrmResult<Product>;

    async fn update_product(&self, product: Product) -> CrmResult<UpdateOutcome>;

    async fn delete_product(&self, id: u64) -> CrmResult<()>;
}

/// Service trait for the flat booking store.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// All bookings in literal list order.
    async fn list(&self) -> CrmResult<Vec<Booking>>;

    async fn get(&self, id: &str) -> CrmResult<Booking>;

    /// Accepts the client-supplied id as-is; returns Conflict when a booking
    /// with the same id already exists, leaving the store unmodified.
    async fn add(&self, booking: Booking) -> CrmResult<Booking>;

    /// In-place replace keyed by the payload's id.
    async fn update(&self, booking: Booking) -> CrmResult<UpdateOutcome>;

    async fn delete(&self, id: &str) -> CrmResult<()>;
}

//! In-memory implementations of the shop and booking services
//!
//! The workload is demonstration-scale, so all access to a store is
//! serialized behind a single `RwLock` with no further concurrency
//! guarantees. Lock poisoning maps to an internal error instead of
//! panicking.

use crate::core::error::{CrmError, CrmResult, RegistryError};
use crate::core::registry::{Registry, UpdateOutcome};
use crate::core::service::{BookingService, ShopService};
use crate::model::{
    Booking, CUSTOMER_ID_SEED, Customer, ORDER_ID_SEED, Order, PRODUCT_ID_SEED, Product,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Shared state behind the shop service lock: the customer directory and
/// the flat product catalog.
struct ShopState {
    customers: Registry<Customer>,
    catalog: Registry<Product>,
}

/// In-memory shop service
#[derive(Clone)]
pub struct InMemoryShopService {
    inner: Arc<RwLock<ShopState>>,
}

impl InMemoryShopService {
    /// Create an empty store with counters at their seed values.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ShopState {
                customers: Registry::starting_at(CUSTOMER_ID_SEED),
                catalog: Registry::starting_at(PRODUCT_ID_SEED),
            })),
        }
    }

    /// Create a store pre-loaded with the demo records: customer 123
    /// "Jelena Katusic" holding order 223, and catalog product 323 at
    /// price 1000.
    pub fn with_demo_data() -> Self {
        let service = Self::new();
        {
            let mut state = service.inner.write().expect("fresh lock cannot be poisoned");

            let mut customer = Customer::new("Jelena Katusic");
            customer.id = CUSTOMER_ID_SEED;
            let mut order = Order::new(format!("order {}", ORDER_ID_SEED));
            order.id = ORDER_ID_SEED;
            customer.orders.seed(order);
            state.customers.seed(customer);

            let mut product = Product::new(format!("product {}", PRODUCT_ID_SEED), 1000);
            product.id = PRODUCT_ID_SEED;
            state.catalog.seed(product);
        }
        service
    }

    fn read(&self) -> CrmResult<std::sync::RwLockReadGuard<'_, ShopState>> {
        self.inner
            .read()
            .map_err(|e| CrmError::Internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> CrmResult<std::sync::RwLockWriteGuard<'_, ShopState>> {
        self.inner
            .write()
            .map_err(|e| CrmError::Internal(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for InMemoryShopService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShopService for InMemoryShopService {
    async fn list_customers(&self) -> CrmResult<Vec<Customer>> {
        Ok(self.read()?.customers.list())
    }

    async fn get_customer(&self, id: u64) -> CrmResult<Customer> {
        Ok(self.read()?.customers.get(id)?.clone())
    }

    async fn add_customer(&self, customer: Customer) -> CrmResult<Customer> {
        Ok(self.write()?.customers.add(customer))
    }

    async fn update_customer(&self, customer: Customer) -> CrmResult<UpdateOutcome> {
        Ok(self.write()?.customers.update(customer)?)
    }

    async fn delete_customer(&self, id: u64) -> CrmResult<()> {
        self.write()?.customers.delete(id)?;
        Ok(())
    }

    async fn list_orders(&self, customer_id: u64) -> CrmResult<Vec<Order>> {
        Ok(self.read()?.customers.get(customer_id)?.order_list())
    }

    async fn get_order(&self, customer_id: u64, order_id: u64) -> CrmResult<Order> {
        Ok(self
            .read()?
            .customers
            .get(customer_id)?
            .order(order_id)?
            .clone())
    }

    async fn add_order(&self, customer_id: u64, order: Order) -> CrmResult<Order> {
        let mut state = self.write()?;
        let customer = state.customers.get_mut(customer_id)?;
        Ok(customer.add_order(order))
    }

    async fn delete_order(&self, customer_id: u64, order_id: u64) -> CrmResult<()> {
        let mut state = self.write()?;
        let customer = state.customers.get_mut(customer_id)?;
        customer.delete_order(order_id)?;
        Ok(())
    }

    async fn list_order_products(
        &self,
        customer_id: u64,
        order_id: u64,
    ) -> CrmResult<Vec<Product>> {
        Ok(self
            .read()?
            .customers
            .get(customer_id)?
            .order(order_id)?
            .product_list())
    }

    async fn get_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<Product> {
        Ok(self
            .read()?
            .customers
            .get(customer_id)?
            .order(order_id)?
            .product(product_id)?
            .clone())
    }

    async fn add_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<()> {
        let mut state = self.write()?;
        let product = state.catalog.get(product_id)?.clone();
        let customer = state.customers.get_mut(customer_id)?;
        let order = customer.order_mut(order_id)?;
        order.add_product(product);
        Ok(())
    }

    async fn delete_order_product(
        &self,
        customer_id: u64,
        order_id: u64,
        product_id: u64,
    ) -> CrmResult<()> {
        let mut state = self.write()?;
        let customer = state.customers.get_mut(customer_id)?;
        let order = customer.order_mut(order_id)?;
        order.remove_product(product_id)?;
        Ok(())
    }

    async fn list_products(&self) -> CrmResult<Vec<Product>> {
        Ok(self.read()?.catalog.list())
    }

    async fn get_product(&self, id: u64) -> CrmResult<Product> {
        Ok(self.read()?.catalog.get(id)?.clone())
    }

    async fn add_product(&self, product: Product) -> CrmResult<Product> {
        Ok(self.write()?.catalog.add(product))
    }

    async fn update_product(&self, product: Product) -> CrmResult<UpdateOutcome> {
        Ok(self.write()?.catalog.update(product)?)
    }

    async fn delete_product(&self, id: u64) -> CrmResult<()> {
        self.write()?.catalog.delete(id)?;
        Ok(())
    }
}

/// In-memory booking store: an ordered sequence with linear-scan lookup
/// and client-supplied string ids.
#[derive(Clone)]
pub struct InMemoryBookingService {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

const BOOKING_RESOURCE: &str = "booking";

impl InMemoryBookingService {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn read(&self) -> CrmResult<std::sync::RwLockReadGuard<'_, Vec<Booking>>> {
        self.bookings
            .read()
            .map_err(|e| CrmError::Internal(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> CrmResult<std::sync::RwLockWriteGuard<'_, Vec<Booking>>> {
        self.bookings
            .write()
            .map_err(|e| CrmError::Internal(format!("Failed to acquire write lock: {}", e)))
    }
}

impl Default for InMemoryBookingService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingService for InMemoryBookingService {
    async fn list(&self) -> CrmResult<Vec<Booking>> {
        Ok(self.read()?.clone())
    }

    async fn get(&self, id: &str) -> CrmResult<Booking> {
        let bookings = self.read()?;
        bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found_named(BOOKING_RESOURCE, id).into())
    }

    async fn add(&self, booking: Booking) -> CrmResult<Booking> {
        let mut bookings = self.write()?;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(RegistryError::conflict(BOOKING_RESOURCE, &booking.id).into());
        }
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> CrmResult<UpdateOutcome> {
        let mut bookings = self.write()?;
        let position = bookings
            .iter()
            .position(|b| b.id == booking.id)
            .ok_or_else(|| RegistryError::not_found_named(BOOKING_RESOURCE, &booking.id))?;
        if bookings[position] == booking {
            return Ok(UpdateOutcome::Unchanged);
        }
        bookings[position] = booking;
        Ok(UpdateOutcome::Updated)
    }

    async fn delete(&self, id: &str) -> CrmResult<()> {
        let mut bookings = self.write()?;
        let position = bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| RegistryError::not_found_named(BOOKING_RESOURCE, id))?;
        bookings.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_data_seeded() {
        let shop = InMemoryShopService::with_demo_data();

        let customer = shop.get_customer(123).await.unwrap();
        assert_eq!(customer.name, "Jelena Katusic");

        let orders = shop.list_orders(123).await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, 223);

        let product = shop.get_product(323).await.unwrap();
        assert_eq!(product.price, 1000);
    }

    #[tokio::test]
    async fn test_add_customer_assigns_next_id() {
        let shop = InMemoryShopService::with_demo_data();
        let created = shop
            .add_customer(Customer::new("National Aquarium"))
            .await
            .unwrap();
        assert_eq!(created.id, 124);
    }

    #[tokio::test]
    async fn test_add_order_product_uses_catalog_price() {
        let shop = InMemoryShopService::with_demo_data();
        shop.add_order_product(123, 223, 323).await.unwrap();

        let order = shop.get_order(123, 223).await.unwrap();
        assert_eq!(order.total, 1000);
        assert_eq!(order.product_list().len(), 1);
    }

    #[tokio::test]
    async fn test_add_order_product_missing_catalog_entry() {
        let shop = InMemoryShopService::with_demo_data();
        let err = shop.add_order_product(123, 223, 999).await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_customer_leaves_catalog_alone() {
        let shop = InMemoryShopService::with_demo_data();
        shop.delete_customer(123).await.unwrap();

        assert!(shop.get_customer(123).await.is_err());
        // Deletion is local to one registry
        assert!(shop.get_product(323).await.is_ok());
    }

    #[tokio::test]
    async fn test_booking_add_and_get() {
        let service = InMemoryBookingService::new();
        service
            .add(Booking::new("B-1", "Jelena", "AF1234"))
            .await
            .unwrap();

        let booking = service.get("B-1").await.unwrap();
        assert_eq!(booking.flight, "AF1234");
    }

    #[tokio::test]
    async fn test_booking_duplicate_id_conflicts() {
        let service = InMemoryBookingService::new();
        service
            .add(Booking::new("B-1", "Jelena", "AF1234"))
            .await
            .unwrap();

        let err = service
            .add(Booking::new("B-1", "Someone Else", "BA99"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);

        // Store unmodified
        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].customer, "Jelena");
    }

    #[tokio::test]
    async fn test_booking_update_replaces_in_place() {
        let service = InMemoryBookingService::new();
        service.add(Booking::new("B-1", "Jelena", "AF1234")).await.unwrap();
        service.add(Booking::new("B-2", "Marko", "LH7")).await.unwrap();

        let outcome = service
            .update(Booking::new("B-1", "Jelena", "AF5678"))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated);

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2, "update must not append");
        assert_eq!(all[0].id, "B-1", "list order preserved");
        assert_eq!(all[0].flight, "AF5678");
    }

    #[tokio::test]
    async fn test_booking_update_identical_is_unchanged() {
        let service = InMemoryBookingService::new();
        let booking = Booking::new("B-1", "Jelena", "AF1234");
        service.add(booking.clone()).await.unwrap();

        let outcome = service.update(booking).await.unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);
    }

    #[tokio::test]
    async fn test_booking_delete_absent_is_not_found() {
        let service = InMemoryBookingService::new();
        let err = service.delete("nope").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::NOT_FOUND);
    }
}

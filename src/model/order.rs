//! Order entity with its contained product registry and total accounting

use crate::core::error::RegistryResult;
use crate::core::registry::{Registry, Resource};
use crate::model::{ORDER_PRODUCT_ID_SEED, Product};
use serde::{Deserialize, Serialize};

/// An order owned by a customer.
///
/// The contained product registry and the running `total` are server-side
/// state: they are not part of the wire payload and do not take part in
/// payload equality. `total` is maintained incrementally on add/remove, not
/// derived lazily, so it reflects the prices in effect at the time each
/// product was added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub description: String,

    /// Running sum maintained by [`add_product`](Order::add_product) and
    /// [`remove_product`](Order::remove_product)
    #[serde(default)]
    pub total: i64,

    #[serde(skip, default = "product_registry")]
    pub products: Registry<Product>,
}

fn product_registry() -> Registry<Product> {
    Registry::starting_at(ORDER_PRODUCT_ID_SEED)
}

impl Order {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: 0,
            description: description.into(),
            total: 0,
            products: product_registry(),
        }
    }

    /// Add a catalog product to this order.
    ///
    /// If the product id is new to the order, the product is inserted under
    /// its catalog id. The stored copy's quantity counter is bumped by one
    /// and one unit price is added to the total: a flat per-call increment,
    /// not quantity-scaled.
    pub fn add_product(&mut self, product: Product) {
        let id = product.id;
        let price = product.price;
        if !self.products.contains(id) {
            self.products.seed(product);
        }
        if let Ok(stored) = self.products.get_mut(id) {
            stored.quantity_ordered += 1;
        }
        self.total += price;
    }

    /// Remove a product from this order entirely (no partial-quantity
    /// decrement), subtracting `price * quantity_ordered` from the total.
    pub fn remove_product(&mut self, product_id: u64) -> RegistryResult<Product> {
        let stored = self.products.get(product_id)?;
        self.total -= stored.price * i64::from(stored.quantity_ordered);
        self.products.delete(product_id)
    }

    pub fn product(&self, product_id: u64) -> RegistryResult<&Product> {
        self.products.get(product_id)
    }

    pub fn product_list(&self) -> Vec<Product> {
        self.products.list()
    }
}

/// Payload equality: id, description and total. Contained products are
/// server-side state and excluded.
impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.description == other.description && self.total == other.total
    }
}

impl Resource for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

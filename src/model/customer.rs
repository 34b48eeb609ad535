//! Customer entity owning a registry of orders

use crate::core::error::RegistryResult;
use crate::core::registry::{Registry, Resource};
use crate::model::{ORDER_ID_SEED, Order};
use serde::{Deserialize, Serialize};

/// A customer record with a contained order registry.
///
/// The wire payload is `{id, name}`; contained orders are reachable only
/// through the nested order endpoints. Deleting a customer does not touch
/// anything outside its own registry entry (no cascading).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub name: String,

    #[serde(skip, default = "order_registry")]
    pub orders: Registry<Order>,
}

fn order_registry() -> Registry<Order> {
    Registry::starting_at(ORDER_ID_SEED)
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            orders: order_registry(),
        }
    }

    pub fn order(&self, order_id: u64) -> RegistryResult<&Order> {
        self.orders.get(order_id)
    }

    pub fn order_mut(&mut self, order_id: u64) -> RegistryResult<&mut Order> {
        self.orders.get_mut(order_id)
    }

    pub fn order_list(&self) -> Vec<Order> {
        self.orders.list()
    }

    /// Assign the next order id and insert.
    pub fn add_order(&mut self, order: Order) -> Order {
        self.orders.add(order)
    }

    pub fn delete_order(&mut self, order_id: u64) -> RegistryResult<Order> {
        self.orders.delete(order_id)
    }
}

/// Payload equality: id and name. Contained orders are server-side state
/// and excluded, so an update carrying an identical payload is detected as
/// `Unchanged` without looking at the order registry.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Resource for Customer {
    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_assigned_order_id_follows_seed() {
        let mut customer = Customer::new("Jelena Katusic");
        let order = customer.add_order(Order::new("first"));
        assert_eq!(order.id, ORDER_ID_SEED + 1);
    }

    #[test]
    fn test_delete_order_is_local() {
        let mut customer = Customer::new("Jelena Katusic");
        let keep = customer.add_order(Order::new("keep"));
        let drop = customer.add_order(Order::new("drop"));

        customer.delete_order(drop.id).unwrap();
        assert_eq!(customer.order_list().len(), 1);
        assert_eq!(customer.order_list()[0].id, keep.id);
    }

    #[test]
    fn test_payload_equality_ignores_orders() {
        let mut a = Customer::new("same");
        a.id = 123;
        let mut b = a.clone();
        b.add_order(Order::new("extra"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_wire_payload_is_id_and_name() {
        let mut customer = Customer::new("Jelena Katusic");
        customer.id = 123;
        customer.add_order(Order::new("order 223"));

        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 123, "name": "Jelena Katusic"})
        );
    }
}

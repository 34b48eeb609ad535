//! Product entity, used both in the flat catalog and inside orders

use crate::core::registry::Resource;
use serde::{Deserialize, Serialize};

/// A product record.
///
/// Field values are not validated anywhere: negative prices and quantities
/// are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the catalog registry on create; preserved when the
    /// product is copied into an order.
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub name: String,

    /// Unit price
    #[serde(default)]
    pub price: i64,

    /// Per-order quantity counter, bumped once per add-to-order call
    #[serde(default)]
    pub quantity_ordered: i32,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
            quantity_ordered: 0,
        }
    }
}

impl Resource for Product {
    fn resource_name() -> &'static str {
        "products"
    }

    fn resource_name_singular() -> &'static str {
        "product"
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
    fn test_negative_price_accepted() {
        let product = Product::new("refund line", -50);
        assert_eq!(product.price, -50);
    }

    #[test]
    fn test_deserialize_without_id() {
        let product: Product = serde_json::from_str(r#"{"name":"lamp","price":10}"#).unwrap();
        assert_eq!(product.id, 0);
        assert_eq!(product.quantity_ordered, 0);
    }
}

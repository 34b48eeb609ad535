//! Booking entity for the flat, sequence-backed store

use serde::{Deserialize, Serialize};

/// A booking record.
///
/// Unlike the shop entities, bookings carry an opaque string id supplied by
/// the client on create. The store rejects a duplicate id with a Conflict
/// instead of overwriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,

    #[serde(default)]
    pub customer: String,

    #[serde(default)]
    pub flight: String,
}

impl Booking {
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        flight: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            flight: flight.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_covers_all_fields() {
        let a = Booking::new("B-1", "Jelena", "AF1234");
        let mut b = a.clone();
        assert_eq!(a, b);

        b.flight = "AF5678".to_string();
        assert_ne!(a, b);
    }
}

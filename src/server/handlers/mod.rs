//! HTTP handlers for the registry surfaces
//!
//! Handlers parse path ids explicitly so a malformed numeric segment maps to
//! a 400 BadRequest instead of a framework rejection, translate service
//! outcomes to status codes (Unchanged → 304) and otherwise stay thin: all
//! data manipulation lives behind the service traits.

pub mod bookings;
pub mod customers;
pub mod orders;
pub mod products;

use crate::core::error::{CrmResult, RequestError};
use crate::core::service::{BookingService, ShopService};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub shop: Arc<dyn ShopService>,
    pub bookings: Arc<dyn BookingService>,
}

/// Parse a numeric id from a path segment, mapping failure to BadRequest.
pub(crate) fn parse_id(value: &str) -> CrmResult<u64> {
    value.parse().map_err(|_| {
        RequestError::InvalidId {
            value: value.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_id_accepts_digits() {
        assert_eq!(parse_id("123").unwrap(), 123);
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        let err = parse_id("twelve").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_parse_id_rejects_negative() {
        assert!(parse_id("-1").is_err());
    }
}

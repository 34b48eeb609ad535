//! Router builder for the registry surfaces

use crate::server::handlers::{AppState, bookings, customers, orders, products};
use axum::{Router, routing::get};

/// Build the shop routes: customers, their nested orders and order
/// products, and the flat product catalog.
///
/// - GET/POST /customers, PUT /customers (update by payload id)
/// - GET/DELETE /customers/{id}
/// - GET/POST /customers/{id}/orders
/// - GET/DELETE /customers/{id}/orders/{order_id}
/// - GET /customers/{id}/orders/{order_id}/products
/// - GET/PUT/DELETE /customers/{id}/orders/{order_id}/products/{product_id}
/// - GET/POST/PUT /products, GET/DELETE /products/{id}
pub fn build_shop_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/customers",
            get(customers::list_customers)
                .post(customers::add_customer)
                .put(customers::update_customer),
        )
        .route(
            "/customers/{id}",
            get(customers::get_customer).delete(customers::delete_customer),
        )
        .route(
            "/customers/{id}/orders",
            get(orders::list_orders).post(orders::add_order),
        )
        .route(
            "/customers/{id}/orders/{order_id}",
            get(orders::get_order).delete(orders::delete_order),
        )
        .route(
            "/customers/{id}/orders/{order_id}/products",
            get(orders::list_order_products),
        )
        .route(
            "/customers/{id}/orders/{order_id}/products/{product_id}",
            get(orders::get_order_product)
                .put(orders::add_order_product)
                .delete(orders::delete_order_product),
        )
        .route(
            "/products",
            get(products::list_products)
                .post(products::add_product)
                .put(products::update_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product).delete(products::delete_product),
        )
        .with_state(state)
}

/// Build the booking routes (flat collection, string ids).
pub fn build_booking_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/bookings",
            get(bookings::list_bookings)
                .post(bookings::add_booking)
                .put(bookings::update_booking),
        )
        .route(
            "/bookings/{id}",
            get(bookings::get_booking).delete(bookings::delete_booking),
        )
        .with_state(state)
}

/// Health check routes
pub fn build_health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "crm-rs"
    }))
}

// Route registration is exercised end to end in tests/rest_api_tests.rs;
// only a smoke check lives here.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{InMemoryBookingService, InMemoryShopService};
    use std::sync::Arc;

    #[test]
    fn test_routers_build() {
        let state = AppState {
            shop: Arc::new(InMemoryShopService::new()),
            bookings: Arc::new(InMemoryBookingService::new()),
        };
        let _ = build_shop_routes(state.clone());
        let _ = build_booking_routes(state);
        let _ = build_health_routes();
    }
}

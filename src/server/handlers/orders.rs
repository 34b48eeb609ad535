//! Handlers for orders nested under a customer, and the products held by
//! an order

use super::{AppState, parse_id};
use crate::core::error::CrmResult;
use crate::model::{Order, Product};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// GET /customers/{id}/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<Json<Vec<Order>>> {
    tracing::info!("Invoking list_orders, customer id is: {}", id);
    let customer_id = parse_id(&id)?;
    Ok(Json(state.shop.list_orders(customer_id).await?))
}

/// GET /customers/{id}/orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    Path((id, order_id)): Path<(String, String)>,
) -> CrmResult<Json<Order>> {
    tracing::info!("Invoking get_order, order id is: {}", order_id);
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    Ok(Json(state.shop.get_order(customer_id, order_id).await?))
}

/// POST /customers/{id}/orders — assigns the next order id within the
/// customer and returns the stored order.
pub async fn add_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(order): Json<Order>,
) -> CrmResult<Json<Order>> {
    tracing::info!(
        "Invoking add_order, order description is: {}",
        order.description
    );
    let customer_id = parse_id(&id)?;
    Ok(Json(state.shop.add_order(customer_id, order).await?))
}

/// DELETE /customers/{id}/orders/{order_id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path((id, order_id)): Path<(String, String)>,
) -> CrmResult<StatusCode> {
    tracing::info!("Invoking delete_order, order id is: {}", order_id);
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    state.shop.delete_order(customer_id, order_id).await?;
    Ok(StatusCode::OK)
}

/// GET /customers/{id}/orders/{order_id}/products
pub async fn list_order_products(
    State(state): State<AppState>,
    Path((id, order_id)): Path<(String, String)>,
) -> CrmResult<Json<Vec<Product>>> {
    tracing::info!("Invoking list_order_products, order id is: {}", order_id);
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    Ok(Json(
        state.shop.list_order_products(customer_id, order_id).await?,
    ))
}

/// GET /customers/{id}/orders/{order_id}/products/{product_id}
pub async fn get_order_product(
    State(state): State<AppState>,
    Path((id, order_id, product_id)): Path<(String, String, String)>,
) -> CrmResult<Json<Product>> {
    tracing::info!("Invoking get_order_product, product id is: {}", product_id);
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    let product_id = parse_id(&product_id)?;
    Ok(Json(
        state
            .shop
            .get_order_product(customer_id, order_id, product_id)
            .await?,
    ))
}

/// PUT /customers/{id}/orders/{order_id}/products/{product_id} — copies the
/// catalog product into the order, bumping its per-order quantity and the
/// order total.
pub async fn add_order_product(
    State(state): State<AppState>,
    Path((id, order_id, product_id)): Path<(String, String, String)>,
) -> CrmResult<StatusCode> {
    tracing::info!("Invoking add_order_product, product id is: {}", product_id);
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    let product_id = parse_id(&product_id)?;
    state
        .shop
        .add_order_product(customer_id, order_id, product_id)
        .await?;
    Ok(StatusCode::OK)
}

/// DELETE /customers/{id}/orders/{order_id}/products/{product_id}
pub async fn delete_order_product(
    State(state): State<AppState>,
    Path((id, order_id, product_id)): Path<(String, String, String)>,
) -> CrmResult<StatusCode> {
    tracing::info!(
        "Invoking delete_order_product, product id is: {}",
        product_id
    );
    let customer_id = parse_id(&id)?;
    let order_id = parse_id(&order_id)?;
    let product_id = parse_id(&product_id)?;
    state
        .shop
        .delete_order_product(customer_id, order_id, product_id)
        .await?;
    Ok(StatusCode::OK)
}

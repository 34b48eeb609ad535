//! Handlers for the flat product catalog

use super::{AppState, parse_id};
use crate::core::error::CrmResult;
use crate::core::registry::UpdateOutcome;
use crate::model::Product;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> CrmResult<Json<Vec<Product>>> {
    tracing::info!("Invoking list_products");
    Ok(Json(state.shop.list_products().await?))
}

/// GET /products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<Json<Product>> {
    tracing::info!("Invoking get_product, product id is: {}", id);
    let id = parse_id(&id)?;
    Ok(Json(state.shop.get_product(id).await?))
}

/// POST /products — server-assigned id, returns the stored entity.
pub async fn add_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> CrmResult<Json<Product>> {
    tracing::info!("Invoking add_product, product name is: {}", product.name);
    Ok(Json(state.shop.add_product(product).await?))
}

/// PUT /products — 200 on replace, 304 unchanged, 404 absent.
pub async fn update_product(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> CrmResult<Response> {
    tracing::info!("Invoking update_product, product id is: {}", product.id);
    match state.shop.update_product(product).await? {
        UpdateOutcome::Updated => Ok(StatusCode::OK.into_response()),
        UpdateOutcome::Unchanged => Ok(StatusCode::NOT_MODIFIED.into_response()),
    }
}

/// DELETE /products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<StatusCode> {
    tracing::info!("Invoking delete_product, product id is: {}", id);
    let id = parse_id(&id)?;
    state.shop.delete_product(id).await?;
    Ok(StatusCode::OK)
}

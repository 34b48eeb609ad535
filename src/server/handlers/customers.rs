//! Handlers for the customer collection

use super::{AppState, parse_id};
use crate::core::error::CrmResult;
use crate::core::registry::UpdateOutcome;
use crate::model::Customer;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// GET /customers
pub async fn list_customers(State(state): State<AppState>) -> CrmResult<Json<Vec<Customer>>> {
    tracing::info!("Invoking list_customers");
    Ok(Json(state.shop.list_customers().await?))
}

/// GET /customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<Json<Customer>> {
    tracing::info!("Invoking get_customer, customer id is: {}", id);
    let id = parse_id(&id)?;
    Ok(Json(state.shop.get_customer(id).await?))
}

/// POST /customers — the server assigns the id; returns the stored entity
/// so the client learns the assigned id.
pub async fn add_customer(
    State(state): State<AppState>,
    Json(customer): Json<Customer>,
) -> CrmResult<Json<Customer>> {
    tracing::info!("Invoking add_customer, customer name is: {}", customer.name);
    Ok(Json(state.shop.add_customer(customer).await?))
}

/// PUT /customers — in-place replace keyed by the payload's id.
/// 200 on replace, 304 when the payload equals the stored value, 404 when
/// the id is absent.
pub async fn update_customer(
    State(state): State<AppState>,
    Json(customer): Json<Customer>,
) -> CrmResult<Response> {
    tracing::info!(
        "Invoking update_customer, customer name is: {}",
        customer.name
    );
    match state.shop.update_customer(customer).await? {
        UpdateOutcome::Updated => Ok(StatusCode::OK.into_response()),
        UpdateOutcome::Unchanged => Ok(StatusCode::NOT_MODIFIED.into_response()),
    }
}

/// DELETE /customers/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<StatusCode> {
    tracing::info!("Invoking delete_customer, customer id is: {}", id);
    let id = parse_id(&id)?;
    state.shop.delete_customer(id).await?;
    Ok(StatusCode::OK)
}

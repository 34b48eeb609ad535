//! Handlers for the flat booking collection

use super::AppState;
use crate::core::error::CrmResult;
use crate::core::registry::UpdateOutcome;
use crate::model::Booking;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// GET /bookings
pub async fn list_bookings(State(state): State<AppState>) -> CrmResult<Json<Vec<Booking>>> {
    tracing::info!("Invoking list_bookings");
    Ok(Json(state.bookings.list().await?))
}

/// GET /bookings/{id} — booking ids are opaque strings, no parsing.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<Json<Booking>> {
    tracing::info!("Invoking get_booking, booking id is: {}", id);
    Ok(Json(state.bookings.get(&id).await?))
}

/// POST /bookings — accepts the client-supplied id as-is; 409 when a
/// booking with the same id already exists.
pub async fn add_booking(
    State(state): State<AppState>,
    Json(booking): Json<Booking>,
) -> CrmResult<Json<Booking>> {
    tracing::info!("Invoking add_booking, booking id is: {}", booking.id);
    Ok(Json(state.bookings.add(booking).await?))
}

/// PUT /bookings — in-place replace; 200, 304 unchanged, 404 absent.
pub async fn update_booking(
    State(state): State<AppState>,
    Json(booking): Json<Booking>,
) -> CrmResult<Response> {
    tracing::info!("Invoking update_booking, booking id is: {}", booking.id);
    match state.bookings.update(booking).await? {
        UpdateOutcome::Updated => Ok(StatusCode::OK.into_response()),
        UpdateOutcome::Unchanged => Ok(StatusCode::NOT_MODIFIED.into_response()),
    }
}

/// DELETE /bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> CrmResult<StatusCode> {
    tracing::info!("Invoking delete_booking, booking id is: {}", id);
    state.bookings.delete(&id).await?;
    Ok(StatusCode::OK)
}

//! ServerBuilder for a fluent API to build and serve the HTTP surface
//!
//! The stores are explicit, constructed dependencies handed to the builder
//! at startup. Init and teardown live here: `serve` binds, runs and handles
//! SIGTERM/Ctrl+C for graceful shutdown.

use crate::core::service::{BookingService, ShopService};
use crate::server::handlers::AppState;
use crate::server::router::{build_booking_routes, build_health_routes, build_shop_routes};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the registry HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_shop_service(InMemoryShopService::with_demo_data())
///     .with_booking_service(InMemoryBookingService::new())
///     .serve("127.0.0.1:8181")
///     .await?;
/// ```
pub struct ServerBuilder {
    shop: Option<Arc<dyn ShopService>>,
    bookings: Option<Arc<dyn BookingService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            shop: None,
            bookings: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the shop service (required)
    pub fn with_shop_service(mut self, service: impl ShopService + 'static) -> Self {
        self.shop = Some(Arc::new(service));
        self
    }

    /// Set the booking service (required)
    pub fn with_booking_service(mut self, service: impl BookingService + 'static) -> Self {
        self.bookings = Some(Arc::new(service));
        self
    }

    /// Add custom routes that don't fit the CRUD pattern
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router: health checks, shop routes, booking routes
    /// and any custom routes, with request tracing.
    pub fn build(mut self) -> Result<Router> {
        let shop = self
            .shop
            .take()
            .ok_or_else(|| anyhow::anyhow!("ShopService is required. Call .with_shop_service()"))?;
        let bookings = self.bookings.take().ok_or_else(|| {
            anyhow::anyhow!("BookingService is required. Call .with_booking_service()")
        })?;

        let state = AppState { shop, bookings };

        let mut app = build_health_routes()
            .merge(build_shop_routes(state.clone()))
            .merge(build_booking_routes(state));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

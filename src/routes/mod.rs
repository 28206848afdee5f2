//! Rutas de la API
//!
//! Todo cuelga de `/api`. `health` y `auth/login` son públicas; el resto
//! pasa por `require_auth`.

pub mod auth_routes;
pub mod car_routes;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod note_routes;
pub mod purchase_routes;
pub mod sale_routes;
pub mod service_record_routes;
pub mod settings_routes;

use std::time::Duration;

use axum::{extract::State, middleware, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::database::DatabaseConnection;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Tiempo máximo que espera `/health` a la base de datos
const HEALTH_DB_TIMEOUT: Duration = Duration::from_secs(2);

pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .merge(car_routes::create_car_router())
        .merge(service_record_routes::create_service_record_router())
        .merge(note_routes::create_note_router())
        .merge(sale_routes::create_sale_router())
        .merge(purchase_routes::create_purchase_router())
        .merge(customer_routes::create_customer_router())
        .merge(settings_routes::create_settings_router())
        .merge(dashboard_routes::create_dashboard_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/health", get(health_check))
        .merge(auth_routes::create_auth_router(state))
        .merge(protected)
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let connection = DatabaseConnection::from_pool(state.pool.clone());
    let database_ok = matches!(
        tokio::time::timeout(HEALTH_DB_TIMEOUT, connection.health_check()).await,
        Ok(Ok(()))
    );

    let (status, database) = if database_ok {
        ("ok", "connected")
    } else {
        log::warn!("⚠️ Health check: base de datos no disponible");
        ("degraded", "disconnected")
    };

    Json(json!({
        "status": status,
        "database": database,
        "message": "Car yard API is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

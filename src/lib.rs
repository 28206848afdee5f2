//! Car Yard - backend de gestión de un patio de venta de coches
//!
//! Inventario, gastos de taller, compras, ventas, clientes y reporting,
//! con el cálculo de costes y beneficios por coche en `services`.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::cors_middleware_with_origins;
use crate::state::AppState;

/// Router completo con CORS, compresión y trazas de requests
pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware_with_origins(&state.config.cors_origins);

    Router::new()
        .nest("/api", routes::create_api_router(state.clone()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors),
        )
        .with_state(state)
}

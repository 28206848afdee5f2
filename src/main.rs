use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use car_yard::config::EnvironmentConfig;
use car_yard::database::DatabaseConnection;
use car_yard::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG o LOG_LEVEL, por defecto info)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string())))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🚗 Car Yard - API de gestión del patio");
    info!("================================================");

    let config = EnvironmentConfig::default();
    info!(
        "🕒 Fecha de negocio {} (TZ={})",
        car_yard::utils::dates::business_today(),
        std::env::var("TZ").unwrap_or_else(|_| "sistema".to_string())
    );
    if config.uses_default_secret() {
        if config.is_production() {
            error!("❌ JWT_SECRET no configurado en producción");
            return Err(anyhow::anyhow!("JWT_SECRET must be set in production"));
        }
        warn!("⚠️ Usando JWT_SECRET de desarrollo");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    db_connection.run_migrations().await?;
    db_connection.seed_admin(&config).await?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app = car_yard::create_app(AppState::new(db_connection.pool().clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /api/health - Health check");
    info!("   POST /api/auth/login - Login");
    info!("🚗 /api/cars, /api/cars/:id/services, /api/cars/:id/notes");
    info!("💰 /api/sales, /api/purchases, /api/customers");
    info!("📊 /api/dashboard/stats, profit-loss, expiry-alerts, aging-stock, monthly-sales");
    info!("⚙️ /api/settings, /api/settings/password");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

//! Conexión a PostgreSQL
//!
//! Crea el pool, aplica las migraciones embebidas y asegura que exista el
//! usuario administrador inicial.

use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::{DatabaseConfig, EnvironmentConfig};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, AppError> {
        info!("🗄️ Conectando a la base de datos: {}", config.masked_url());
        let pool = config.create_pool().await?;
        info!("✅ Conexión a la base de datos establecida");
        Ok(Self { pool })
    }

    pub async fn new_default() -> Result<Self, AppError> {
        Self::new(&DatabaseConfig::default()).await
    }

    /// Envuelve un pool ya creado (el del estado de la aplicación)
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("🔄 Aplicando migraciones...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("✅ Migraciones aplicadas");
        Ok(())
    }

    /// Crea el usuario administrador si todavía no existe
    pub async fn seed_admin(&self, config: &EnvironmentConfig) -> Result<(), AppError> {
        let users = UserRepository::new(self.pool.clone());

        if users.find_by_username(&config.admin_username).await?.is_some() {
            return Ok(());
        }

        let password_hash = hash(&config.admin_password, DEFAULT_COST)?;
        users
            .create(&config.admin_username, &config.admin_email, &password_hash)
            .await?;

        info!("👤 Usuario administrador '{}' creado", config.admin_username);
        if config.admin_password == "admin123" {
            warn!("⚠️ El administrador usa la contraseña por defecto, cámbiala en Settings");
        }
        Ok(())
    }

    /// Verificar que la conexión funciona
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

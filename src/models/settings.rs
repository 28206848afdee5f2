use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Datos del negocio - una única fila (id = 1)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BusinessSettings {
    pub id: i32,
    pub business_name: String,
    pub business_phone: String,
    pub business_email: String,
    pub business_address: Option<String>,
    pub updated_at: DateTime<Utc>,
}

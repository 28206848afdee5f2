use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Nota de actividad asociada a un coche
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityNote {
    pub id: Uuid,
    pub car_id: Uuid,
    pub note: String,
    pub created_at: DateTime<Utc>,
}

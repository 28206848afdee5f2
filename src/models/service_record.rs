//! Modelo de ServiceRecord (gastos de taller, WOF, registro...)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub car_id: Uuid,
    pub service_date: NaiveDate,
    pub service_type: String,
    pub description: String,
    pub cost: Decimal,
    pub provider: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

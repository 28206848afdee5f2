//! Modelo de Purchase (acuerdo de compra con el vendedor)

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: Uuid,
    pub car_id: Uuid,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub seller_name: String,
    pub seller_email: Option<String>,
    pub seller_phone: String,
    pub seller_address: Option<String>,
    pub seller_license_number: String,
    pub seller_license_version: Option<String>,
    pub payment_method: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

//! Modelo de Sale
//!
//! Como máximo una venta por coche (UNIQUE car_id).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Sale principal - mapea exactamente a la tabla sales
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: Uuid,
    pub car_id: Uuid,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: String,
    pub customer_license_number: String,
    pub customer_license_version: Option<String>,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_notes: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Venta con los datos del coche y el total de gastos de taller
#[derive(Debug, Clone, FromRow)]
pub struct SaleWithCar {
    #[sqlx(flatten)]
    pub sale: Sale,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub total_service_cost: Decimal,
}

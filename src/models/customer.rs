//! Modelo de Customer
//!
//! Las compras de un cliente se asocian por teléfono con `sales.customer_phone`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,
    pub license_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cliente con el resumen de sus compras
#[derive(Debug, Clone, FromRow)]
pub struct CustomerWithStats {
    #[sqlx(flatten)]
    pub customer: Customer,
    pub purchase_count: i64,
    pub total_spent: Decimal,
}

/// Compra de un cliente (venta del patio) con los datos del coche
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerPurchase {
    pub sale_id: Uuid,
    pub car_id: Uuid,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
    pub payment_method: String,
    pub payment_status: String,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
}

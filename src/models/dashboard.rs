//! Modelos de Dashboard
//!
//! Filas agregadas que devuelven las consultas de reporting. Cada consulta
//! trae todo lo necesario en un solo viaje; los importes derivados se
//! calculan después en `services::cost_calculator`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::car::CarStatus;

/// Una fila por coche con su gasto total de taller y su venta, si existe
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct StockLedgerRow {
    pub car_id: Uuid,
    pub status: CarStatus,
    pub purchase_price: Decimal,
    pub total_service_cost: Decimal,
    pub sale_price: Option<Decimal>,
}

/// Coche vendido con los datos necesarios para el informe de pérdidas y ganancias
#[derive(Debug, Clone, FromRow)]
pub struct SoldCarRow {
    pub car_id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub total_service_cost: Decimal,
    pub sale_date: NaiveDate,
    pub sale_price: Decimal,
}

/// Coche activo con sus fechas de vencimiento
#[derive(Debug, Clone, FromRow)]
pub struct ExpiryRow {
    pub id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub registration_expiry: NaiveDate,
    pub wof_expiry: NaiveDate,
}

/// Coche activo candidato a stock envejecido
#[derive(Debug, Clone, FromRow)]
pub struct AgingRow {
    pub id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
}

/// Ventas agrupadas por mes (`YYYY-MM`)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MonthlySalesRow {
    pub month: String,
    pub count: i64,
    pub revenue: Decimal,
}

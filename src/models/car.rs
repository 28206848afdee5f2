//! Modelo de Car
//!
//! Mapea exactamente a la tabla `cars`. El estado lo controla el registro
//! de venta: existe una venta si y solo si el coche está `sold`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del coche - mapea al ENUM car_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq, Hash)]
#[sqlx(type_name = "car_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CarStatus {
    Active,
    Sold,
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub odometer: Option<i32>,
    pub vin: Option<String>,
    pub registration_expiry: NaiveDate,
    pub wof_expiry: NaiveDate,
    pub purchase_date: NaiveDate,
    pub purchase_price: Decimal,
    pub status: CarStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Coche junto con la fecha de su venta, si la hay
#[derive(Debug, Clone, FromRow)]
pub struct CarWithSaleDate {
    #[sqlx(flatten)]
    pub car: Car,
    pub sale_date: Option<NaiveDate>,
}

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::sale::{Sale, SaleWithCar};
use crate::services::cost_calculator::{compute_profit_summary, cost_summary_from_totals, days_to_sell};
use crate::utils::validation::{
    validate_non_negative, validate_nz_license, validate_nz_phone, validate_payment_method,
};

pub const DEFAULT_PAYMENT_STATUS: &str = "completed";

// Request para vender un coche
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSaleRequest {
    pub car_id: Uuid,
    pub sale_date: NaiveDate,
    #[validate(custom = "validate_non_negative")]
    pub sale_price: Decimal,
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub customer_email: Option<String>,
    #[validate(custom = "validate_nz_phone")]
    pub customer_phone: String,
    #[validate(custom = "validate_nz_license")]
    pub customer_license_number: String,
    pub customer_license_version: Option<String>,
    #[validate(custom = "validate_payment_method")]
    pub payment_method: String,
    pub payment_status: Option<String>,
    pub payment_notes: Option<String>,
    pub notes: Option<String>,
}

// Request para actualizar una venta (parcial)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSaleRequest {
    pub sale_date: Option<NaiveDate>,
    #[validate(custom = "validate_non_negative")]
    pub sale_price: Option<Decimal>,
    #[validate(length(min = 1, message = "Customer name cannot be empty"))]
    pub customer_name: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub customer_email: Option<String>,
    #[validate(custom = "validate_nz_phone")]
    pub customer_phone: Option<String>,
    #[validate(custom = "validate_nz_license")]
    pub customer_license_number: Option<String>,
    pub customer_license_version: Option<String>,
    #[validate(custom = "validate_payment_method")]
    pub payment_method: Option<String>,
    pub payment_status: Option<String>,
    pub payment_notes: Option<String>,
    pub notes: Option<String>,
}

// Venta con datos del coche, coste total y beneficio
#[derive(Debug, Serialize)]
pub struct SaleResponse {
    #[serde(flatten)]
    pub sale: Sale,
    pub registration_plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub purchase_price: Decimal,
    pub total_cost: Decimal,
    pub profit: Decimal,
    pub margin: Option<Decimal>,
    pub days_to_sell: i64,
}

impl From<SaleWithCar> for SaleResponse {
    fn from(row: SaleWithCar) -> Self {
        let costs = cost_summary_from_totals(row.purchase_price, row.total_service_cost);
        let profit = compute_profit_summary(&costs, row.sale.sale_price);
        let days_to_sell = days_to_sell(row.purchase_date, row.sale.sale_date);

        Self {
            sale: row.sale,
            registration_plate: row.registration_plate,
            make: row.make,
            model: row.model,
            year: row.year,
            purchase_price: row.purchase_price,
            total_cost: profit.total_cost,
            profit: profit.profit,
            margin: profit.margin,
            days_to_sell,
        }
    }
}

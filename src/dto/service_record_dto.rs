use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::{validate_non_negative, validate_service_type};

// Request para registrar un gasto de taller
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRecordRequest {
    pub service_date: NaiveDate,
    #[validate(custom = "validate_service_type")]
    pub service_type: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom = "validate_non_negative")]
    pub cost: Decimal,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

// Request para actualizar un gasto (parcial)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateServiceRecordRequest {
    pub service_date: Option<NaiveDate>,
    #[validate(custom = "validate_service_type")]
    pub service_type: Option<String>,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: Option<String>,
    #[validate(custom = "validate_non_negative")]
    pub cost: Option<Decimal>,
    pub provider: Option<String>,
    pub notes: Option<String>,
}

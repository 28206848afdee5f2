use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::car::{Car, CarStatus};
use crate::models::sale::Sale;
use crate::models::service_record::ServiceRecord;
use crate::services::cost_calculator::{CostSummary, ProfitSummary};
use crate::utils::validation::{validate_model_year, validate_non_negative, validate_nz_plate};

// Request para dar de alta un coche
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(custom = "validate_nz_plate")]
    pub registration_plate: String,
    #[validate(length(min = 1, message = "Make is required"))]
    pub make: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    #[validate(custom = "validate_model_year")]
    pub year: i32,
    pub color: Option<String>,
    #[validate(range(min = 0, message = "Odometer must be a positive number"))]
    pub odometer: Option<i32>,
    #[validate(length(min = 11, max = 17, message = "VIN must be between 11 and 17 characters"))]
    pub vin: Option<String>,
    pub registration_expiry: NaiveDate,
    pub wof_expiry: NaiveDate,
    pub purchase_date: NaiveDate,
    #[validate(custom = "validate_non_negative")]
    pub purchase_price: Decimal,
    pub notes: Option<String>,
}

// Request para actualizar un coche (parcial; el estado lo controlan las ventas)
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateCarRequest {
    #[validate(custom = "validate_nz_plate")]
    pub registration_plate: Option<String>,
    #[validate(length(min = 1, message = "Make cannot be empty"))]
    pub make: Option<String>,
    #[validate(length(min = 1, message = "Model cannot be empty"))]
    pub model: Option<String>,
    #[validate(custom = "validate_model_year")]
    pub year: Option<i32>,
    pub color: Option<String>,
    #[validate(range(min = 0, message = "Odometer must be a positive number"))]
    pub odometer: Option<i32>,
    #[validate(length(min = 11, max = 17, message = "VIN must be between 11 and 17 characters"))]
    pub vin: Option<String>,
    pub registration_expiry: Option<NaiveDate>,
    pub wof_expiry: Option<NaiveDate>,
    pub purchase_date: Option<NaiveDate>,
    #[validate(custom = "validate_non_negative")]
    pub purchase_price: Option<Decimal>,
    pub notes: Option<String>,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct CarListQuery {
    pub status: Option<CarStatus>,
    pub search: Option<String>,
}

// Coche del listado con sus días en stock
#[derive(Debug, Serialize)]
pub struct CarListItem {
    #[serde(flatten)]
    pub car: Car,
    pub days_in_stock: i64,
}

// Ficha completa de un coche
#[derive(Debug, Serialize)]
pub struct CarDetailResponse {
    #[serde(flatten)]
    pub car: Car,
    pub service_records: Vec<ServiceRecord>,
    pub sale: Option<Sale>,
    pub costs: CostSummary,
    pub profit: Option<ProfitSummary>,
    pub days_in_stock: i64,
    pub days_to_sell: Option<i64>,
}

// Costes de un coche
#[derive(Debug, Serialize)]
pub struct CarCostsResponse {
    pub car_id: uuid::Uuid,
    #[serde(flatten)]
    pub costs: CostSummary,
    pub profit: Option<ProfitSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(year: i32) -> CreateCarRequest {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        CreateCarRequest {
            registration_plate: "ABC123".to_string(),
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year,
            color: None,
            odometer: Some(150000),
            vin: None,
            registration_expiry: date,
            wof_expiry: date,
            purchase_date: date,
            purchase_price: Decimal::from(5000),
            notes: None,
        }
    }

    #[test]
    fn test_create_request_year_range() {
        assert!(create_request(2012).validate().is_ok());

        let errors = create_request(1899).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_update_request_year_is_optional() {
        assert!(UpdateCarRequest::default().validate().is_ok());

        let request = UpdateCarRequest {
            year: Some(1850),
            ..Default::default()
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }
}

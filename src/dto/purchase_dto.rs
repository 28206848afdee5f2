use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{
    validate_non_negative, validate_nz_license, validate_nz_phone, validate_payment_method,
};

// Request para registrar el acuerdo de compra con el vendedor
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePurchaseRequest {
    pub car_id: Uuid,
    pub purchase_date: NaiveDate,
    #[validate(custom = "validate_non_negative")]
    pub purchase_price: Decimal,
    #[validate(length(min = 1, message = "Seller name is required"))]
    pub seller_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub seller_email: Option<String>,
    #[validate(custom = "validate_nz_phone")]
    pub seller_phone: String,
    pub seller_address: Option<String>,
    #[validate(custom = "validate_nz_license")]
    pub seller_license_number: String,
    pub seller_license_version: Option<String>,
    #[validate(custom = "validate_payment_method")]
    pub payment_method: String,
    pub notes: Option<String>,
}

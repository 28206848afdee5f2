use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::customer::{Customer, CustomerPurchase, CustomerWithStats};
use crate::utils::validation::{validate_nz_license, validate_nz_phone};

// Request para crear o reemplazar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[validate(custom = "validate_nz_phone")]
    pub phone: String,
    pub address: Option<String>,
    #[validate(custom = "validate_nz_license")]
    pub license_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    pub search: Option<String>,
}

// Cliente con el resumen de compras
#[derive(Debug, Serialize)]
pub struct CustomerSummaryResponse {
    #[serde(flatten)]
    pub customer: Customer,
    pub purchase_count: i64,
    pub total_spent: Decimal,
}

impl From<CustomerWithStats> for CustomerSummaryResponse {
    fn from(row: CustomerWithStats) -> Self {
        Self {
            customer: row.customer,
            purchase_count: row.purchase_count,
            total_spent: row.total_spent,
        }
    }
}

// Cliente con su historial de compras
#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    #[serde(flatten)]
    pub customer: Customer,
    pub purchases: Vec<CustomerPurchase>,
    pub purchase_count: i64,
    pub total_spent: Decimal,
}

impl CustomerDetailResponse {
    pub fn new(customer: Customer, purchases: Vec<CustomerPurchase>) -> Self {
        let total_spent = purchases.iter().map(|p| p.sale_price).sum();
        Self {
            purchase_count: purchases.len() as i64,
            total_spent,
            customer,
            purchases,
        }
    }
}

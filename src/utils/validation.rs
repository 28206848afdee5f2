//! Utilidades de validación
//!
//! Validadores personalizados para `validator` con los formatos de Nueva
//! Zelanda (matrícula, licencia de conducir, teléfono) y las listas de
//! valores permitidos del dominio.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    static ref NZ_STANDARD_PLATE: Regex = Regex::new(r"^[A-Z]{2,3}[0-9]{1,4}$").unwrap();
    static ref NZ_PERSONALISED_PLATE: Regex = Regex::new(r"^[A-Z0-9]{2,6}$").unwrap();
    static ref NZ_LICENSE: Regex = Regex::new(r"^[A-Z]{2}[0-9]{6}$").unwrap();
    static ref NZ_PHONE: Regex = Regex::new(r"^(\+64|0)[2-9][0-9]{7,9}$").unwrap();
}

pub const SERVICE_TYPES: [&str; 5] = ["repair", "maintenance", "wof", "registration", "other"];
pub const PAYMENT_METHODS: [&str; 5] = ["cash", "bank_transfer", "finance", "trade_in", "other"];

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Matrícula NZ: estándar (ABC123) o personalizada (2-6 caracteres)
pub fn is_valid_nz_plate(plate: &str) -> bool {
    let upper = plate.to_uppercase();
    NZ_STANDARD_PLATE.is_match(&upper) || NZ_PERSONALISED_PLATE.is_match(&upper)
}

/// Licencia NZ: 2 letras + 6 dígitos (AA123456)
pub fn is_valid_nz_license(license: &str) -> bool {
    NZ_LICENSE.is_match(&license.to_uppercase())
}

/// Teléfono NZ: +64 o 0 seguido del prefijo; espacios y guiones ignorados
pub fn is_valid_nz_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
    NZ_PHONE.is_match(&compact)
}

pub fn validate_nz_plate(plate: &str) -> Result<(), ValidationError> {
    if is_valid_nz_plate(plate) {
        Ok(())
    } else {
        Err(error_with_message(
            "nz_plate",
            "Invalid NZ registration plate format".to_string(),
        ))
    }
}

pub fn validate_nz_license(license: &str) -> Result<(), ValidationError> {
    if is_valid_nz_license(license) {
        Ok(())
    } else {
        Err(error_with_message(
            "nz_license",
            "Invalid NZ driver license format (should be 2 letters + 6 digits, e.g., AA123456)".to_string(),
        ))
    }
}

pub fn validate_nz_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_nz_phone(phone) {
        Ok(())
    } else {
        Err(error_with_message("nz_phone", "Invalid NZ phone number format".to_string()))
    }
}

pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error_with_message(
            "non_negative",
            "Must be a positive number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_service_type(value: &str) -> Result<(), ValidationError> {
    if SERVICE_TYPES.contains(&value) {
        Ok(())
    } else {
        Err(error_with_message(
            "service_type",
            format!("Service type must be one of: {}", SERVICE_TYPES.join(", ")),
        ))
    }
}

pub fn validate_payment_method(value: &str) -> Result<(), ValidationError> {
    if PAYMENT_METHODS.contains(&value) {
        Ok(())
    } else {
        Err(error_with_message(
            "payment_method",
            format!("Payment method must be one of: {}", PAYMENT_METHODS.join(", ")),
        ))
    }
}

/// Año de modelo entre 1900 y el año siguiente al actual
pub fn validate_model_year(year: i32) -> Result<(), ValidationError> {
    let max_year = Utc::now().year() + 1;
    if (1900..=max_year).contains(&year) {
        Ok(())
    } else {
        Err(error_with_message(
            "year",
            format!("Year must be between 1900 and {}", max_year),
        ))
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message("not_blank", "Must not be empty".to_string()));
    }
    Ok(())
}

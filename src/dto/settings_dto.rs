use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para actualizar los datos del negocio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(custom = "validate_not_blank")]
    pub business_name: String,
    #[validate(custom = "validate_not_blank")]
    pub business_phone: String,
    #[validate(email(message = "Invalid email address"))]
    pub business_email: String,
    pub business_address: Option<String>,
}

// Request para cambiar la contraseña del usuario actual
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,
}

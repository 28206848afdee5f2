//! DTOs de la API
//!
//! Requests validados con `validator` y respuestas que combinan filas de la
//! base de datos con los importes derivados.

pub mod api_response;
pub mod auth_dto;
pub mod car_dto;
pub mod customer_dto;
pub mod dashboard_dto;
pub mod note_dto;
pub mod purchase_dto;
pub mod sale_dto;
pub mod service_record_dto;
pub mod settings_dto;

pub use api_response::ApiResponse;

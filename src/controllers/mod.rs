//! Controladores
//!
//! Validan la entrada, coordinan repositorios y servicios y construyen la
//! respuesta `ApiResponse`.

pub mod auth_controller;
pub mod car_controller;
pub mod customer_controller;
pub mod dashboard_controller;
pub mod note_controller;
pub mod purchase_controller;
pub mod sale_controller;
pub mod service_record_controller;
pub mod settings_controller;

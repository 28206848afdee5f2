//! Repositorios
//!
//! Acceso a PostgreSQL con SQLx. Un repositorio por tabla principal más
//! las consultas agregadas del dashboard.

pub mod car_repository;
pub mod customer_repository;
pub mod dashboard_repository;
pub mod note_repository;
pub mod purchase_repository;
pub mod sale_repository;
pub mod service_record_repository;
pub mod settings_repository;
pub mod user_repository;

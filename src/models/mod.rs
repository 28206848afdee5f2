//! Modelos del sistema
//!
//! Este módulo contiene los structs que mapean exactamente a las tablas
//! PostgreSQL definidas en `migrations/`.

pub mod car;
pub mod customer;
pub mod dashboard;
pub mod note;
pub mod purchase;
pub mod sale;
pub mod service_record;
pub mod settings;
pub mod user;

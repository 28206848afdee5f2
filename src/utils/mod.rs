//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación,
//! fechas y JWT.

pub mod dates;
pub mod errors;
pub mod jwt;
pub mod validation;

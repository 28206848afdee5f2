//! Services module
//!
//! Lógica de negocio pura: cálculos de costes y beneficios, estadísticas
//! del patio y alertas de stock. No acceden a la base de datos; reciben
//! filas ya cargadas por los repositorios.

pub mod cost_calculator;
pub mod fleet_statistics;
pub mod stock_alerts;

pub use cost_calculator::{CostSummary, ProfitSummary};
pub use fleet_statistics::FleetStatistics;

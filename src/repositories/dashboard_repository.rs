//! Consultas de reporting
//!
//! Cada método resuelve su informe con una sola consulta agregada.

use crate::models::dashboard::{AgingRow, ExpiryRow, MonthlySalesRow, SoldCarRow, StockLedgerRow};
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Una fila por coche con su gasto total y su venta, si existe.
    ///
    /// Los gastos se suman antes del join para que la venta no los duplique.
    pub async fn stock_ledger(&self) -> Result<Vec<StockLedgerRow>, AppError> {
        let rows = sqlx::query_as::<_, StockLedgerRow>(
            r#"
            SELECT c.id AS car_id, c.status, c.purchase_price,
                   COALESCE(sr.total_cost, 0) AS total_service_cost,
                   s.sale_price
            FROM cars c
            LEFT JOIN (
                SELECT car_id, SUM(cost) AS total_cost
                FROM service_records
                GROUP BY car_id
            ) sr ON sr.car_id = c.id
            LEFT JOIN sales s ON s.car_id = c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn sold_cars(&self) -> Result<Vec<SoldCarRow>, AppError> {
        let rows = sqlx::query_as::<_, SoldCarRow>(
            r#"
            SELECT c.id AS car_id, c.registration_plate, c.make, c.model, c.year,
                   c.purchase_date, c.purchase_price,
                   COALESCE(sr.total_cost, 0) AS total_service_cost,
                   s.sale_date, s.sale_price
            FROM cars c
            JOIN sales s ON s.car_id = c.id
            LEFT JOIN (
                SELECT car_id, SUM(cost) AS total_cost
                FROM service_records
                GROUP BY car_id
            ) sr ON sr.car_id = c.id
            WHERE c.status = 'sold'
            ORDER BY s.sale_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Coches activos con registro o WOF vencido o que vence antes de `horizon`
    pub async fn expiring_cars(&self, horizon: NaiveDate) -> Result<Vec<ExpiryRow>, AppError> {
        let rows = sqlx::query_as::<_, ExpiryRow>(
            r#"
            SELECT id, registration_plate, make, model, year, registration_expiry, wof_expiry
            FROM cars
            WHERE status = 'active'
              AND (registration_expiry <= $1 OR wof_expiry <= $1)
            ORDER BY registration_expiry ASC, wof_expiry ASC
            "#,
        )
        .bind(horizon)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Coches activos comprados en o antes de `cutoff`, el más antiguo primero
    pub async fn aging_cars(&self, cutoff: NaiveDate) -> Result<Vec<AgingRow>, AppError> {
        let rows = sqlx::query_as::<_, AgingRow>(
            r#"
            SELECT id, registration_plate, make, model, year, purchase_date, purchase_price
            FROM cars
            WHERE status = 'active' AND purchase_date <= $1
            ORDER BY purchase_date ASC
            "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn monthly_sales(&self, since: NaiveDate) -> Result<Vec<MonthlySalesRow>, AppError> {
        let rows = sqlx::query_as::<_, MonthlySalesRow>(
            r#"
            SELECT to_char(sale_date, 'YYYY-MM') AS month,
                   COUNT(*) AS count,
                   COALESCE(SUM(sale_price), 0) AS revenue
            FROM sales
            WHERE sale_date >= $1
            GROUP BY month
            ORDER BY month DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

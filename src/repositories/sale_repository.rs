//! Repositorio de ventas
//!
//! Crear y borrar una venta cambia también el estado del coche; ambas
//! escrituras van en la misma transacción.

use crate::dto::sale_dto::{CreateSaleRequest, UpdateSaleRequest, DEFAULT_PAYMENT_STATUS};
use crate::models::car::CarStatus;
use crate::models::sale::{Sale, SaleWithCar};
use crate::utils::errors::{map_unique_violation, not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;

const SALE_WITH_CAR_SELECT: &str = r#"
    SELECT s.*, c.registration_plate, c.make, c.model, c.year, c.purchase_date, c.purchase_price,
           COALESCE(SUM(sr.cost), 0) AS total_service_cost
    FROM sales s
    JOIN cars c ON c.id = s.car_id
    LEFT JOIN service_records sr ON sr.car_id = c.id
"#;

pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<SaleWithCar>, AppError> {
        let query = format!(
            "{} GROUP BY s.id, c.id ORDER BY s.sale_date DESC, s.created_at DESC",
            SALE_WITH_CAR_SELECT
        );
        let sales = sqlx::query_as::<_, SaleWithCar>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(sales)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<SaleWithCar>, AppError> {
        let query = format!("{} WHERE s.id = $1 GROUP BY s.id, c.id", SALE_WITH_CAR_SELECT);
        let sale = sqlx::query_as::<_, SaleWithCar>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    pub async fn find_by_car_id(&self, car_id: Uuid) -> Result<Option<SaleWithCar>, AppError> {
        let query = format!("{} WHERE s.car_id = $1 GROUP BY s.id, c.id", SALE_WITH_CAR_SELECT);
        let sale = sqlx::query_as::<_, SaleWithCar>(&query)
            .bind(car_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Venta simple de un coche, sin agregados
    pub async fn find_plain_by_car_id(&self, car_id: Uuid) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>("SELECT * FROM sales WHERE car_id = $1")
            .bind(car_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Registra la venta y marca el coche como vendido
    pub async fn create(&self, request: &CreateSaleRequest) -> Result<Sale, AppError> {
        let mut tx = self.pool.begin().await?;

        let status: Option<(CarStatus,)> =
            sqlx::query_as("SELECT status FROM cars WHERE id = $1 FOR UPDATE")
                .bind(request.car_id)
                .fetch_optional(&mut *tx)
                .await?;

        match status {
            None => return Err(not_found_error("Car")),
            Some((CarStatus::Sold,)) => {
                return Err(AppError::BadRequest("Car is already sold".to_string()))
            }
            Some((CarStatus::Active,)) => {}
        }

        let sale = sqlx::query_as::<_, Sale>(
            r#"
            INSERT INTO sales (
                id, car_id, sale_date, sale_price, customer_name, customer_email, customer_phone,
                customer_license_number, customer_license_version, payment_method,
                payment_status, payment_notes, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.car_id)
        .bind(request.sale_date)
        .bind(request.sale_price)
        .bind(&request.customer_name)
        .bind(&request.customer_email)
        .bind(&request.customer_phone)
        .bind(request.customer_license_number.to_uppercase())
        .bind(&request.customer_license_version)
        .bind(&request.payment_method)
        .bind(
            request
                .payment_status
                .as_deref()
                .unwrap_or(DEFAULT_PAYMENT_STATUS),
        )
        .bind(&request.payment_notes)
        .bind(&request.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, "This car already has a sale record"))?;

        sqlx::query("UPDATE cars SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(request.car_id)
            .bind(CarStatus::Sold)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(sale)
    }

    pub async fn update(&self, id: Uuid, request: &UpdateSaleRequest) -> Result<Option<Sale>, AppError> {
        let sale = sqlx::query_as::<_, Sale>(
            r#"
            UPDATE sales SET
                sale_date = COALESCE($2, sale_date),
                sale_price = COALESCE($3, sale_price),
                customer_name = COALESCE($4, customer_name),
                customer_email = COALESCE($5, customer_email),
                customer_phone = COALESCE($6, customer_phone),
                customer_license_number = COALESCE($7, customer_license_number),
                customer_license_version = COALESCE($8, customer_license_version),
                payment_method = COALESCE($9, payment_method),
                payment_status = COALESCE($10, payment_status),
                payment_notes = COALESCE($11, payment_notes),
                notes = COALESCE($12, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.sale_date)
        .bind(request.sale_price)
        .bind(&request.customer_name)
        .bind(&request.customer_email)
        .bind(&request.customer_phone)
        .bind(request.customer_license_number.as_ref().map(|l| l.to_uppercase()))
        .bind(&request.customer_license_version)
        .bind(&request.payment_method)
        .bind(&request.payment_status)
        .bind(&request.payment_notes)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(sale)
    }

    /// Anula la venta y devuelve el coche al inventario activo
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let deleted: Option<(Uuid,)> = sqlx::query_as("DELETE FROM sales WHERE id = $1 RETURNING car_id")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some((car_id,)) = deleted else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query("UPDATE cars SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(car_id)
            .bind(CarStatus::Active)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }
}

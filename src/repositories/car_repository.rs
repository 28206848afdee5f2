use crate::dto::car_dto::{CreateCarRequest, UpdateCarRequest};
use crate::models::car::{Car, CarStatus, CarWithSaleDate};
use crate::utils::errors::{map_unique_violation, AppError};
use sqlx::PgPool;
use uuid::Uuid;

const DUPLICATE_PLATE: &str = "A car with this registration plate already exists";

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listado con filtro opcional por estado y búsqueda en matrícula, marca y modelo
    pub async fn find_all(
        &self,
        status: Option<CarStatus>,
        search: Option<&str>,
    ) -> Result<Vec<CarWithSaleDate>, AppError> {
        let pattern = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", s));

        let cars = sqlx::query_as::<_, CarWithSaleDate>(
            r#"
            SELECT c.*, s.sale_date
            FROM cars c
            LEFT JOIN sales s ON s.car_id = c.id
            WHERE ($1::car_status IS NULL OR c.status = $1)
              AND (
                $2::text IS NULL
                OR c.registration_plate ILIKE $2
                OR c.make ILIKE $2
                OR c.model ILIKE $2
              )
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(status)
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn create(&self, request: &CreateCarRequest) -> Result<Car, AppError> {
        sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (
                id, registration_plate, make, model, year, color, odometer, vin,
                registration_expiry, wof_expiry, purchase_date, purchase_price, status, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, 'active', $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.registration_plate)
        .bind(&request.make)
        .bind(&request.model)
        .bind(request.year)
        .bind(&request.color)
        .bind(request.odometer)
        .bind(&request.vin)
        .bind(request.registration_expiry)
        .bind(request.wof_expiry)
        .bind(request.purchase_date)
        .bind(request.purchase_price)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PLATE))
    }

    /// Actualización parcial; los campos ausentes conservan su valor
    pub async fn update(&self, id: Uuid, request: &UpdateCarRequest) -> Result<Option<Car>, AppError> {
        sqlx::query_as::<_, Car>(
            r#"
            UPDATE cars SET
                registration_plate = COALESCE($2, registration_plate),
                make = COALESCE($3, make),
                model = COALESCE($4, model),
                year = COALESCE($5, year),
                color = COALESCE($6, color),
                odometer = COALESCE($7, odometer),
                vin = COALESCE($8, vin),
                registration_expiry = COALESCE($9, registration_expiry),
                wof_expiry = COALESCE($10, wof_expiry),
                purchase_date = COALESCE($11, purchase_date),
                purchase_price = COALESCE($12, purchase_price),
                notes = COALESCE($13, notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.registration_plate)
        .bind(&request.make)
        .bind(&request.model)
        .bind(request.year)
        .bind(&request.color)
        .bind(request.odometer)
        .bind(&request.vin)
        .bind(request.registration_expiry)
        .bind(request.wof_expiry)
        .bind(request.purchase_date)
        .bind(request.purchase_price)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_PLATE))
    }

    /// Borra el coche solo si sigue activo. Devuelve `false` si no se borró nada.
    pub async fn delete_active(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1 AND status = 'active'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

use crate::dto::service_record_dto::{CreateServiceRecordRequest, UpdateServiceRecordRequest};
use crate::models::service_record::ServiceRecord;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct ServiceRecordRepository {
    pool: PgPool,
}

impl ServiceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<ServiceRecord>, AppError> {
        let records = sqlx::query_as::<_, ServiceRecord>(
            "SELECT * FROM service_records WHERE car_id = $1 ORDER BY service_date DESC, created_at DESC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ServiceRecord>, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>("SELECT * FROM service_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    pub async fn create(
        &self,
        car_id: Uuid,
        request: &CreateServiceRecordRequest,
    ) -> Result<ServiceRecord, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            r#"
            INSERT INTO service_records (id, car_id, service_date, service_type, description, cost, provider, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(request.service_date)
        .bind(&request.service_type)
        .bind(&request.description)
        .bind(request.cost)
        .bind(&request.provider)
        .bind(&request.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: &UpdateServiceRecordRequest,
    ) -> Result<Option<ServiceRecord>, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            r#"
            UPDATE service_records SET
                service_date = COALESCE($2, service_date),
                service_type = COALESCE($3, service_type),
                description = COALESCE($4, description),
                cost = COALESCE($5, cost),
                provider = COALESCE($6, provider),
                notes = COALESCE($7, notes)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.service_date)
        .bind(&request.service_type)
        .bind(&request.description)
        .bind(request.cost)
        .bind(&request.provider)
        .bind(&request.notes)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM service_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

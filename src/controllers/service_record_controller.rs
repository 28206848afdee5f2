use crate::dto::api_response::ApiResponse;
use crate::dto::service_record_dto::{CreateServiceRecordRequest, UpdateServiceRecordRequest};
use crate::models::service_record::ServiceRecord;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::service_record_repository::ServiceRecordRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct ServiceRecordController {
    cars: CarRepository,
    repository: ServiceRecordRepository,
}

impl ServiceRecordController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            repository: ServiceRecordRepository::new(pool),
        }
    }

    async fn ensure_car_exists(&self, car_id: Uuid) -> Result<(), AppError> {
        self.cars
            .find_by_id(car_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| not_found_error("Car"))
    }

    pub async fn list_for_car(&self, car_id: Uuid) -> Result<ApiResponse<Vec<ServiceRecord>>, AppError> {
        self.ensure_car_exists(car_id).await?;
        let records = self.repository.find_by_car(car_id).await?;
        Ok(ApiResponse::list(records))
    }

    pub async fn create(
        &self,
        car_id: Uuid,
        request: CreateServiceRecordRequest,
    ) -> Result<ApiResponse<ServiceRecord>, AppError> {
        request.validate()?;
        self.ensure_car_exists(car_id).await?;

        let record = self.repository.create(car_id, &request).await?;
        log::info!("🔧 Gasto registrado para coche {}: {} ({})", car_id, record.service_type, record.cost);

        Ok(ApiResponse::success_with_message(
            record,
            "Service record added successfully".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateServiceRecordRequest,
    ) -> Result<ApiResponse<ServiceRecord>, AppError> {
        request.validate()?;

        let record = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Service record"))?;

        Ok(ApiResponse::success_with_message(
            record,
            "Service record updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Service record"));
        }
        Ok(())
    }
}

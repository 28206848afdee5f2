use crate::dto::api_response::ApiResponse;
use crate::dto::purchase_dto::CreatePurchaseRequest;
use crate::models::purchase::Purchase;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::purchase_repository::PurchaseRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct PurchaseController {
    cars: CarRepository,
    repository: PurchaseRepository,
}

impl PurchaseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            repository: PurchaseRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreatePurchaseRequest) -> Result<ApiResponse<Purchase>, AppError> {
        request.validate()?;

        if self.cars.find_by_id(request.car_id).await?.is_none() {
            return Err(not_found_error("Car"));
        }

        let purchase = self.repository.create(&request).await?;
        log::info!("📝 Acuerdo de compra registrado para coche {}", purchase.car_id);

        Ok(ApiResponse::success_with_message(
            purchase,
            "Purchase agreement created successfully".to_string(),
        ))
    }

    pub async fn get_by_car_id(&self, car_id: Uuid) -> Result<ApiResponse<Purchase>, AppError> {
        let purchase = self
            .repository
            .find_by_car_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No purchase record found for this car".to_string()))?;

        Ok(ApiResponse::success(purchase))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Purchase record"));
        }
        Ok(())
    }
}

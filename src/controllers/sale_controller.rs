use crate::dto::api_response::ApiResponse;
use crate::dto::sale_dto::{CreateSaleRequest, SaleResponse, UpdateSaleRequest};
use crate::models::sale::Sale;
use crate::repositories::sale_repository::SaleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct SaleController {
    repository: SaleRepository,
}

impl SaleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SaleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<SaleResponse>>, AppError> {
        let sales = self.repository.find_all().await?;
        Ok(ApiResponse::list(sales.into_iter().map(SaleResponse::from).collect()))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<SaleResponse>, AppError> {
        let sale = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Sale"))?;

        Ok(ApiResponse::success(sale.into()))
    }

    pub async fn get_by_car_id(&self, car_id: Uuid) -> Result<ApiResponse<SaleResponse>, AppError> {
        let sale = self
            .repository
            .find_by_car_id(car_id)
            .await?
            .ok_or_else(|| AppError::NotFound("No sale found for this car".to_string()))?;

        Ok(ApiResponse::success(sale.into()))
    }

    pub async fn create(&self, request: CreateSaleRequest) -> Result<ApiResponse<Sale>, AppError> {
        request.validate()?;

        let sale = self.repository.create(&request).await?;
        log::info!("💰 Coche {} vendido por {}", sale.car_id, sale.sale_price);

        Ok(ApiResponse::success_with_message(
            sale,
            "Car marked as sold successfully".to_string(),
        ))
    }

    pub async fn update(&self, id: Uuid, request: UpdateSaleRequest) -> Result<ApiResponse<Sale>, AppError> {
        request.validate()?;

        let sale = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Sale"))?;

        Ok(ApiResponse::success_with_message(sale, "Sale updated successfully".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Sale"));
        }

        log::info!("↩️ Venta {} anulada, coche devuelto al inventario", id);
        Ok(())
    }
}

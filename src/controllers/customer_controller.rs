use crate::dto::api_response::ApiResponse;
use crate::dto::customer_dto::{
    CustomerDetailResponse, CustomerListQuery, CustomerRequest, CustomerSummaryResponse,
};
use crate::models::customer::Customer;
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn list(&self, query: CustomerListQuery) -> Result<ApiResponse<Vec<CustomerSummaryResponse>>, AppError> {
        let customers = self
            .repository
            .find_all_with_stats(query.search.as_deref())
            .await?;

        Ok(ApiResponse::list(
            customers.into_iter().map(CustomerSummaryResponse::from).collect(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<CustomerDetailResponse>, AppError> {
        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Customer"))?;
        let purchases = self.repository.find_purchases(&customer.phone).await?;

        Ok(ApiResponse::success(CustomerDetailResponse::new(customer, purchases)))
    }

    pub async fn create(&self, request: CustomerRequest) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let customer = self.repository.create(&request).await?;
        log::info!("👤 Cliente creado: {}", customer.name);

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer created successfully".to_string(),
        ))
    }

    pub async fn update(&self, id: Uuid, request: CustomerRequest) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let customer = self
            .repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Customer"))?;

        Ok(ApiResponse::success_with_message(
            customer,
            "Customer updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Customer"));
        }
        Ok(())
    }
}

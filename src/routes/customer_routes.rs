use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::customer_controller::CustomerController;
use crate::dto::api_response::ApiResponse;
use crate::dto::customer_dto::{
    CustomerDetailResponse, CustomerListQuery, CustomerRequest, CustomerSummaryResponse,
};
use crate::models::customer::Customer;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route(
            "/customers/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<CustomerListQuery>,
) -> Result<Json<ApiResponse<Vec<CustomerSummaryResponse>>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CustomerDetailResponse>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Customer>>), AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Customer deleted successfully".to_string())))
}

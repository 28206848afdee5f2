use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::sale_controller::SaleController;
use crate::dto::api_response::ApiResponse;
use crate::dto::sale_dto::{CreateSaleRequest, SaleResponse, UpdateSaleRequest};
use crate::models::sale::Sale;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_sale_router() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/car/:car_id", get(get_sale_by_car))
        .route("/sales/:id", get(get_sale).put(update_sale).delete(delete_sale))
}

async fn list_sales(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<SaleResponse>>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<SaleResponse>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn get_sale_by_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<ApiResponse<SaleResponse>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.get_by_car_id(car_id).await?;
    Ok(Json(response))
}

async fn create_sale(
    State(state): State<AppState>,
    Json(request): Json<CreateSaleRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Sale>>), AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSaleRequest>,
) -> Result<Json<ApiResponse<Sale>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = SaleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message(
        "Sale cancelled and car returned to active inventory".to_string(),
    )))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use crate::controllers::purchase_controller::PurchaseController;
use crate::dto::api_response::ApiResponse;
use crate::dto::purchase_dto::CreatePurchaseRequest;
use crate::models::purchase::Purchase;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_purchase_router() -> Router<AppState> {
    Router::new()
        .route("/purchases", post(create_purchase))
        .route("/purchases/car/:car_id", get(get_purchase_by_car))
        .route("/purchases/:id", delete(delete_purchase))
}

async fn create_purchase(
    State(state): State<AppState>,
    Json(request): Json<CreatePurchaseRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Purchase>>), AppError> {
    let controller = PurchaseController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_purchase_by_car(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Purchase>>, AppError> {
    let controller = PurchaseController::new(state.pool.clone());
    let response = controller.get_by_car_id(car_id).await?;
    Ok(Json(response))
}

async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = PurchaseController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Purchase record deleted successfully".to_string())))
}

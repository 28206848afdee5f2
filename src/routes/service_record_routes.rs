use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use crate::controllers::service_record_controller::ServiceRecordController;
use crate::dto::api_response::ApiResponse;
use crate::dto::service_record_dto::{CreateServiceRecordRequest, UpdateServiceRecordRequest};
use crate::models::service_record::ServiceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_service_record_router() -> Router<AppState> {
    Router::new()
        .route("/cars/:id/services", get(list_services).post(create_service))
        .route("/cars/services/:id", put(update_service).delete(delete_service))
}

async fn list_services(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ServiceRecord>>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.list_for_car(car_id).await?;
    Ok(Json(response))
}

async fn create_service(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Json(request): Json<CreateServiceRecordRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceRecord>>), AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.create(car_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateServiceRecordRequest>,
) -> Result<Json<ApiResponse<ServiceRecord>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Service record deleted successfully".to_string())))
}

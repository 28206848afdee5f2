use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::car_controller::CarController;
use crate::dto::api_response::ApiResponse;
use crate::dto::car_dto::{
    CarCostsResponse, CarDetailResponse, CarListItem, CarListQuery, CreateCarRequest, UpdateCarRequest,
};
use crate::models::car::Car;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/:id", get(get_car).put(update_car).delete(delete_car))
        .route("/cars/:id/costs", get(get_car_costs))
}

async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<CarListQuery>,
) -> Result<Json<ApiResponse<Vec<CarListItem>>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CarDetailResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_detail(id).await?;
    Ok(Json(response))
}

async fn get_car_costs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<CarCostsResponse>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.get_costs(id).await?;
    Ok(Json(response))
}

async fn create_car(
    State(state): State<AppState>,
    Json(request): Json<CreateCarRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Car>>), AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCarRequest>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Car deleted successfully".to_string())))
}

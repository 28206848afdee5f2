use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::note_controller::NoteController;
use crate::dto::api_response::ApiResponse;
use crate::dto::note_dto::NoteRequest;
use crate::models::note::ActivityNote;
use crate::state::AppState;
use crate::utils::errors::AppError;
use uuid::Uuid;

pub fn create_note_router() -> Router<AppState> {
    Router::new()
        .route("/notes/car/:car_id", get(list_notes).post(create_note))
        .route("/notes/:id", get(get_note).put(update_note).delete(delete_note))
}

async fn list_notes(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<ActivityNote>>>, AppError> {
    let controller = NoteController::new(state.pool.clone());
    let response = controller.list_for_car(car_id).await?;
    Ok(Json(response))
}

async fn create_note(
    State(state): State<AppState>,
    Path(car_id): Path<Uuid>,
    Json(request): Json<NoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ActivityNote>>), AppError> {
    let controller = NoteController::new(state.pool.clone());
    let response = controller.create(car_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ActivityNote>>, AppError> {
    let controller = NoteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<ApiResponse<ActivityNote>>, AppError> {
    let controller = NoteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = NoteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message("Note deleted successfully".to_string())))
}

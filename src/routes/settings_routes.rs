use axum::{
    extract::State,
    routing::{get, put},
    Extension, Json, Router,
};
use crate::controllers::settings_controller::SettingsController;
use crate::dto::api_response::ApiResponse;
use crate::dto::settings_dto::{ChangePasswordRequest, UpdateSettingsRequest};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::settings::BusinessSettings;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/settings/password", put(change_password))
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BusinessSettings>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.get().await?;
    Ok(Json(response))
}

async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<BusinessSettings>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.update(request).await?;
    Ok(Json(response))
}

async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    controller.change_password(user.user_id, request).await?;
    Ok(Json(ApiResponse::message("Password changed successfully".to_string())))
}

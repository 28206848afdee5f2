use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::{require_auth, AuthenticatedUser};
use crate::models::user::UserProfile;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// `/auth/login` es público; `me` y `logout` exigen token
pub fn create_auth_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/auth/logout", post(logout))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
        .route("/auth/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.login(request, &state.jwt).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<ApiResponse<UserProfile>>, AppError> {
    let controller = AuthController::new(state.pool.clone());
    let response = controller.me(user.user_id).await?;
    Ok(Json(response))
}

// JWT sin estado: el cliente descarta el token
async fn logout(Extension(user): Extension<AuthenticatedUser>) -> Json<ApiResponse<()>> {
    log::info!("👋 Logout: {}", user.username);
    Json(ApiResponse::message("Logged out successfully".to_string()))
}

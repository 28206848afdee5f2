use crate::dto::api_response::ApiResponse;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::models::user::UserProfile;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use bcrypt::verify;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct AuthController {
    repository: UserRepository,
}

impl AuthController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn login(&self, request: LoginRequest, jwt: &JwtConfig) -> Result<ApiResponse<LoginResponse>, AppError> {
        request.validate()?;

        let invalid = || AppError::Unauthorized("Invalid credentials".to_string());

        let user = self
            .repository
            .find_by_username(&request.username)
            .await?
            .ok_or_else(invalid)?;

        if !verify(&request.password, &user.password_hash)? {
            log::warn!("🔒 Contraseña incorrecta para {}", request.username);
            return Err(invalid());
        }

        let token = generate_token(user.id, &user.username, jwt)?;
        log::info!("✅ Login correcto: {}", user.username);

        Ok(ApiResponse::success(LoginResponse {
            token,
            user: user.into(),
        }))
    }

    pub async fn me(&self, user_id: Uuid) -> Result<ApiResponse<UserProfile>, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User"))?;

        Ok(ApiResponse::success(user.into()))
    }
}

use crate::dto::api_response::ApiResponse;
use crate::dto::settings_dto::{ChangePasswordRequest, UpdateSettingsRequest};
use crate::models::settings::BusinessSettings;
use crate::repositories::settings_repository::SettingsRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{not_found_error, AppError};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct SettingsController {
    repository: SettingsRepository,
    users: UserRepository,
}

impl SettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: SettingsRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn get(&self) -> Result<ApiResponse<BusinessSettings>, AppError> {
        Ok(ApiResponse::success(self.repository.get().await?))
    }

    pub async fn update(&self, request: UpdateSettingsRequest) -> Result<ApiResponse<BusinessSettings>, AppError> {
        request.validate()?;

        let settings = self.repository.update(&request).await?;
        log::info!("⚙️ Datos del negocio actualizados");

        Ok(ApiResponse::success_with_message(
            settings,
            "Settings updated successfully".to_string(),
        ))
    }

    pub async fn change_password(&self, user_id: Uuid, request: ChangePasswordRequest) -> Result<(), AppError> {
        request.validate()?;

        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| not_found_error("User"))?;

        if !verify(&request.current_password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Current password is incorrect".to_string()));
        }

        let password_hash = hash(&request.new_password, DEFAULT_COST)?;
        self.users.update_password(user.id, &password_hash).await?;

        log::info!("🔑 Contraseña actualizada para {}", user.username);
        Ok(())
    }
}

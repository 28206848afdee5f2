use crate::dto::settings_dto::UpdateSettingsRequest;
use crate::models::settings::BusinessSettings;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<BusinessSettings, AppError> {
        let settings = sqlx::query_as::<_, BusinessSettings>("SELECT * FROM settings WHERE id = 1")
            .fetch_one(&self.pool)
            .await?;

        Ok(settings)
    }

    /// La fila única se crea en la migración; el upsert cubre bases sin ella
    pub async fn update(&self, request: &UpdateSettingsRequest) -> Result<BusinessSettings, AppError> {
        let settings = sqlx::query_as::<_, BusinessSettings>(
            r#"
            INSERT INTO settings (id, business_name, business_phone, business_email, business_address, updated_at)
            VALUES (1, $1, $2, $3, $4, NOW())
            ON CONFLICT (id) DO UPDATE SET
                business_name = EXCLUDED.business_name,
                business_phone = EXCLUDED.business_phone,
                business_email = EXCLUDED.business_email,
                business_address = EXCLUDED.business_address,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(request.business_name.trim())
        .bind(request.business_phone.trim())
        .bind(request.business_email.trim())
        .bind(&request.business_address)
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}

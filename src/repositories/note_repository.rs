use crate::models::note::ActivityNote;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct NoteRepository {
    pool: PgPool,
}

impl NoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_car(&self, car_id: Uuid) -> Result<Vec<ActivityNote>, AppError> {
        let notes = sqlx::query_as::<_, ActivityNote>(
            "SELECT * FROM activity_notes WHERE car_id = $1 ORDER BY created_at DESC",
        )
        .bind(car_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ActivityNote>, AppError> {
        let note = sqlx::query_as::<_, ActivityNote>("SELECT * FROM activity_notes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(note)
    }

    pub async fn create(&self, car_id: Uuid, note: &str) -> Result<ActivityNote, AppError> {
        let note = sqlx::query_as::<_, ActivityNote>(
            "INSERT INTO activity_notes (id, car_id, note) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(car_id)
        .bind(note)
        .fetch_one(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn update(&self, id: Uuid, note: &str) -> Result<Option<ActivityNote>, AppError> {
        let note = sqlx::query_as::<_, ActivityNote>(
            "UPDATE activity_notes SET note = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(note)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM activity_notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

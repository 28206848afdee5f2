use crate::dto::api_response::ApiResponse;
use crate::dto::note_dto::NoteRequest;
use crate::models::note::ActivityNote;
use crate::repositories::car_repository::CarRepository;
use crate::repositories::note_repository::NoteRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct NoteController {
    cars: CarRepository,
    repository: NoteRepository,
}

impl NoteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            cars: CarRepository::new(pool.clone()),
            repository: NoteRepository::new(pool),
        }
    }

    pub async fn list_for_car(&self, car_id: Uuid) -> Result<ApiResponse<Vec<ActivityNote>>, AppError> {
        let notes = self.repository.find_by_car(car_id).await?;
        Ok(ApiResponse::list(notes))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ApiResponse<ActivityNote>, AppError> {
        let note = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Note"))?;

        Ok(ApiResponse::success(note))
    }

    pub async fn create(&self, car_id: Uuid, request: NoteRequest) -> Result<ApiResponse<ActivityNote>, AppError> {
        request.validate()?;

        if self.cars.find_by_id(car_id).await?.is_none() {
            return Err(not_found_error("Car"));
        }

        let note = self.repository.create(car_id, &request.trimmed()).await?;
        Ok(ApiResponse::success_with_message(note, "Note added successfully".to_string()))
    }

    pub async fn update(&self, id: Uuid, request: NoteRequest) -> Result<ApiResponse<ActivityNote>, AppError> {
        request.validate()?;

        let note = self
            .repository
            .update(id, &request.trimmed())
            .await?
            .ok_or_else(|| not_found_error("Note"))?;

        Ok(ApiResponse::success_with_message(note, "Note updated successfully".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Note"));
        }
        Ok(())
    }
}

use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para crear o editar una nota de actividad
#[derive(Debug, Deserialize, Validate)]
pub struct NoteRequest {
    #[validate(custom = "validate_not_blank")]
    pub note: String,
}

impl NoteRequest {
    pub fn trimmed(&self) -> String {
        self.note.trim().to_string()
    }
}

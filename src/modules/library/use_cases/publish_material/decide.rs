// Validation for adding a material to the library.

use chrono::NaiveDate;

use crate::modules::library::core::material::{Material, MaterialKind};
use crate::shared::core::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishMaterial {
    pub material_id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: MaterialKind,
    pub file_ref: String,
    /// Defaults to `today` when absent.
    pub upload_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("o título do material é obrigatório")]
    MissingTitle,

    #[error("o arquivo do material é obrigatório")]
    MissingFileRef,
}

impl From<DecideError> for ApplicationError {
    fn from(reason: DecideError) -> Self {
        ApplicationError::Rejected(reason.to_string())
    }
}

pub fn decide_publish(command: PublishMaterial) -> Result<Material, DecideError> {
    let title = command.title.trim();
    if title.is_empty() {
        return Err(DecideError::MissingTitle);
    }
    let file_ref = command.file_ref.trim();
    if file_ref.is_empty() {
        return Err(DecideError::MissingFileRef);
    }
    Ok(Material {
        id: command.material_id,
        title: title.to_string(),
        description: command
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        kind: command.kind,
        file_ref: file_ref.to_string(),
        upload_date: command.upload_date.unwrap_or(command.today),
    })
}

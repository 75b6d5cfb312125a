use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::infrastructure::record_store::Record;

/// A downloadable study material from the course library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: MaterialKind,
    pub file_ref: String,
    pub upload_date: NaiveDate,
}

impl Record for Material {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Slide,
    Pdf,
}

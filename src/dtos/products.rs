use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Creation payload. `rating` defaults to 4.5 when the client omits it;
/// the store-assigned id never appears here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductIn {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default = "default_rating")]
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: f64,

    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_rating() -> f64 {
    4.5
}

impl ProductIn {
    /// Stored representation: the input fields as-is. The store assigns
    /// `_id` on insert, so no identifier is written here.
    pub fn to_document(&self) -> Result<Document, AppError> {
        mongodb::bson::to_document(self)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Failed to encode product: {e}")))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ListProductsParams {
    pub category: Option<String>,
    pub q: Option<String>,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

fn default_limit() -> i64 {
    40
}

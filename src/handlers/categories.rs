use axum::{response::IntoResponse, Json};

use crate::models::CATEGORIES;

pub async fn get_categories() -> impl IntoResponse {
    Json(CATEGORIES)
}

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use mongodb::bson::{doc, oid::ObjectId, Document};
use validator::Validate;

use crate::dtos::{ListProductsParams, ProductIn};
use crate::error::AppError;
use crate::models::Product;
use crate::services::PRODUCT_COLLECTION;
use crate::startup::AppState;

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListProductsParams>,
) -> Result<impl IntoResponse, AppError> {
    params.validate()?;

    if !state.store.is_available() {
        // Minimal in-memory fallback view for demo when no store is configured
        return Ok(Json(vec![demo_product()]));
    }

    let filter = build_filter(params.category.as_deref(), params.q.as_deref());
    let docs = state
        .store
        .find(PRODUCT_COLLECTION, filter, params.limit)
        .await?;

    Ok(Json(
        docs.iter().map(Product::from_document).collect::<Vec<_>>(),
    ))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductIn>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    if !state.store.is_available() {
        return Err(AppError::StoreUnavailable);
    }

    let id = state
        .store
        .insert(PRODUCT_COLLECTION, payload.to_document()?)
        .await?;

    let doc = state
        .store
        .find_by_id(PRODUCT_COLLECTION, &id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!(
                "Inserted product {id} not found on re-read"
            ))
        })?;

    Ok(Json(Product::from_document(&doc)))
}

/// Exact match on `category`, and for `q` a case-insensitive regex over
/// title, description, and tags. A regex filter on the `tags` array matches
/// when any tag matches.
fn build_filter(category: Option<&str>, q: Option<&str>) -> Document {
    let mut filter = Document::new();

    if let Some(category) = category.filter(|c| !c.is_empty()) {
        filter.insert("category", category);
    }

    if let Some(q) = q.filter(|q| !q.is_empty()) {
        let pattern = doc! { "$regex": q, "$options": "i" };
        filter.insert(
            "$or",
            vec![
                doc! { "title": pattern.clone() },
                doc! { "description": pattern.clone() },
                doc! { "tags": pattern },
            ],
        );
    }

    filter
}

fn demo_product() -> Product {
    Product {
        id: ObjectId::new().to_hex(),
        title: "Sample Book".to_string(),
        description: Some("Demo product (DB not configured)".to_string()),
        price: 9.99,
        category: "books".to_string(),
        image: None,
        rating: 4.5,
        tags: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_build_empty_filter() {
        assert_eq!(build_filter(None, None), Document::new());
        assert_eq!(build_filter(Some(""), Some("")), Document::new());
    }

    #[test]
    fn category_filter_is_exact_match() {
        let filter = build_filter(Some("books"), None);
        assert_eq!(filter, doc! { "category": "books" });
    }

    #[test]
    fn query_filter_ors_title_description_and_tags() {
        let filter = build_filter(None, Some("coffee"));
        let clauses = filter.get_array("$or").expect("$or clause");
        assert_eq!(clauses.len(), 3);

        let pattern = doc! { "$regex": "coffee", "$options": "i" };
        assert_eq!(
            filter,
            doc! {
                "$or": [
                    { "title": pattern.clone() },
                    { "description": pattern.clone() },
                    { "tags": pattern },
                ]
            }
        );
    }

    #[test]
    fn category_and_query_combine() {
        let filter = build_filter(Some("snacks"), Some("cookie"));
        assert_eq!(filter.get_str("category").unwrap(), "snacks");
        assert!(filter.contains_key("$or"));
    }

    #[test]
    fn demo_product_is_a_single_book() {
        let product = demo_product();
        assert_eq!(product.category, "books");
        assert_eq!(product.rating, 4.5);
        assert!(product.tags.is_empty());
    }
}

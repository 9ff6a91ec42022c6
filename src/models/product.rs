use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

/// Wire shape of a stored product. Built exclusively through
/// [`Product::from_document`], which is the single boundary where untyped
/// store documents enter the typed world.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub image: Option<String>,
    pub rating: f64,
    pub tags: Vec<String>,
}

impl Product {
    /// Defensive read of a raw store document. Every field is individually
    /// defaulted so that externally inserted or malformed documents never
    /// fail to serialize: missing or null numerics become 0.0, missing tags
    /// become an empty list.
    pub fn from_document(doc: &Document) -> Self {
        Product {
            id: id_as_string(doc.get("_id")),
            title: string_or_empty(doc.get("title")),
            description: optional_string(doc.get("description")),
            price: number_or_zero(doc.get("price")),
            category: string_or_empty(doc.get("category")),
            image: optional_string(doc.get("image")),
            rating: number_or_zero(doc.get("rating")),
            tags: tags_or_empty(doc.get("tags")),
        }
    }
}

fn id_as_string(value: Option<&Bson>) -> String {
    match value {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn string_or_empty(value: Option<&Bson>) -> String {
    match value {
        Some(Bson::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn optional_string(value: Option<&Bson>) -> Option<String> {
    match value {
        Some(Bson::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_or_zero(value: Option<&Bson>) -> f64 {
    match value {
        Some(Bson::Double(f)) => *f,
        Some(Bson::Int32(i)) => f64::from(*i),
        Some(Bson::Int64(i)) => *i as f64,
        _ => 0.0,
    }
}

fn tags_or_empty(value: Option<&Bson>) -> Vec<String> {
    match value {
        Some(Bson::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Bson::String(s) => Some(s.clone()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

use mongodb::bson::{doc, Document};

use super::{ProductStore, StoreError, PRODUCT_COLLECTION};

/// Inserts the demo catalog when the product collection is empty.
///
/// Fire-and-forget by contract: the single caller in startup discards the
/// error branch, so a seeding failure never blocks the service.
pub async fn seed_products_if_empty(store: &ProductStore) -> Result<(), StoreError> {
    if !store.is_available() {
        return Ok(());
    }

    if store.count_all(PRODUCT_COLLECTION).await? > 0 {
        return Ok(());
    }

    for sample in sample_products() {
        store.insert(PRODUCT_COLLECTION, sample).await?;
    }

    tracing::info!("Seeded demo product catalog");
    Ok(())
}

pub fn sample_products() -> Vec<Document> {
    vec![
        doc! {
            "title": "The Bookish Atelier Journal",
            "description": "A5 dotted journal for notes and sketches.",
            "price": 14.99,
            "category": "study",
            "image": "/images/journal.jpg",
            "rating": 4.7,
            "tags": ["notebook", "stationery"],
        },
        doc! {
            "title": "Espresso Shot (Campus Café)",
            "description": "Quick energy boost while you browse.",
            "price": 2.49,
            "category": "snacks",
            "image": "/images/espresso.jpg",
            "rating": 4.6,
            "tags": ["coffee"],
        },
        doc! {
            "title": "Bookish Atelier Tote",
            "description": "Canvas tote for your reads.",
            "price": 12.0,
            "category": "merch",
            "image": "/images/tote.jpg",
            "rating": 4.4,
            "tags": ["bag", "gift"],
        },
        doc! {
            "title": "Annotated Classics: Pride & Prejudice",
            "description": "Curated edition with study notes.",
            "price": 18.5,
            "category": "books",
            "image": "/images/pnp.jpg",
            "rating": 4.9,
            "tags": ["classic", "novel"],
        },
        doc! {
            "title": "Gel Ink Pens (Set of 5)",
            "description": "Smooth writing, 0.5mm.",
            "price": 6.99,
            "category": "study",
            "image": "/images/pens.jpg",
            "rating": 4.3,
            "tags": ["pen", "stationery"],
        },
        doc! {
            "title": "Matcha Cookie",
            "description": "Crisp, lightly sweet.",
            "price": 1.99,
            "category": "snacks",
            "image": "/images/cookie.jpg",
            "rating": 4.2,
            "tags": ["cookie"],
        },
        doc! {
            "title": "Hardcover: The Midnight Library",
            "description": "Best-selling novel.",
            "price": 22.0,
            "category": "books",
            "image": "/images/midnight.jpg",
            "rating": 4.8,
            "tags": ["fiction"],
        },
        doc! {
            "title": "Enamel Pin – Book Lover",
            "description": "Cute collectible pin.",
            "price": 4.5,
            "category": "merch",
            "image": "/images/pin.jpg",
            "rating": 4.1,
            "tags": ["pin", "gift"],
        },
    ]
}

use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    options::FindOptions,
    Client as MongoClient, Database,
};
use thiserror::Error;

use crate::config::CatalogConfig;

pub const PRODUCT_COLLECTION: &str = "product";

const DEFAULT_DATABASE: &str = "bookish_atelier";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database not available")]
    Unavailable,

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

/// Document store adapter. Running without a configured store is a
/// supported state: every caller checks [`ProductStore::is_available`] (or
/// handles [`StoreError::Unavailable`]) instead of failing at startup.
///
/// The underlying driver handles are cheap to clone and safe to share
/// across concurrent requests.
#[derive(Clone)]
pub struct ProductStore {
    db: Option<Database>,
}

impl ProductStore {
    pub async fn connect(config: &CatalogConfig) -> Self {
        let Some(uri) = config.database_url.as_deref() else {
            tracing::warn!("DATABASE_URL not set, running without a document store");
            return Self::unavailable();
        };

        let database_name = config.database_name.as_deref().unwrap_or(DEFAULT_DATABASE);
        match MongoClient::with_uri_str(uri).await {
            Ok(client) => {
                tracing::info!(database = %database_name, "Connected to MongoDB");
                ProductStore {
                    db: Some(client.database(database_name)),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid MongoDB configuration, running without a document store");
                Self::unavailable()
            }
        }
    }

    pub fn unavailable() -> Self {
        ProductStore { db: None }
    }

    pub fn is_available(&self) -> bool {
        self.db.is_some()
    }

    fn database(&self) -> Result<&Database, StoreError> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Persists a new document and returns the store-assigned identifier,
    /// hex-encoded when the store assigns an ObjectId.
    pub async fn insert(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .database()?
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    /// Returns up to `limit` documents matching `filter`, in store-native
    /// order. An empty filter matches everything; no match is an empty
    /// sequence, not an error.
    pub async fn find(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let options = FindOptions::builder().limit(limit).build();
        let mut cursor = self
            .database()?
            .collection::<Document>(collection)
            .find(filter, options)
            .await?;

        let mut documents = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            documents.push(doc);
        }
        Ok(documents)
    }

    pub async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let id_value = match ObjectId::parse_str(id) {
            Ok(oid) => Bson::ObjectId(oid),
            Err(_) => Bson::String(id.to_string()),
        };

        Ok(self
            .database()?
            .collection::<Document>(collection)
            .find_one(doc! { "_id": id_value }, None)
            .await?)
    }

    pub async fn count_all(&self, collection: &str) -> Result<u64, StoreError> {
        Ok(self
            .database()?
            .collection::<Document>(collection)
            .count_documents(doc! {}, None)
            .await?)
    }

    pub async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database()?.list_collection_names(None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unavailable_store_reports_state_and_errors() {
        let store = ProductStore::unavailable();
        assert!(!store.is_available());

        let err = store
            .insert(PRODUCT_COLLECTION, doc! { "title": "x" })
            .await
            .expect_err("insert must fail without a store");
        assert!(matches!(err, StoreError::Unavailable));

        let err = store
            .count_all(PRODUCT_COLLECTION)
            .await
            .expect_err("count must fail without a store");
        assert!(matches!(err, StoreError::Unavailable));
    }

    #[tokio::test]
    async fn connect_without_url_yields_unavailable_store() {
        let config = crate::config::CatalogConfig {
            port: 0,
            database_url: None,
            database_name: None,
        };
        let store = ProductStore::connect(&config).await;
        assert!(!store.is_available());
    }
}

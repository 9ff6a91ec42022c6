use catalog_service::config::CatalogConfig;
use catalog_service::services::ProductStore;
use catalog_service::startup::Application;

/// A catalog service instance on a random port, with direct access to its
/// store adapter for assertions against the backing collection.
pub struct TestApp {
    pub address: String,
    pub store: ProductStore,
}

impl TestApp {
    /// Spawns with no document store configured, exercising the
    /// degraded-mode contract end to end.
    pub async fn spawn() -> Self {
        Self::spawn_with(CatalogConfig {
            port: 0,
            database_url: None,
            database_name: None,
        })
        .await
    }

    pub async fn spawn_with(config: CatalogConfig) -> Self {
        let app = Application::build(config)
            .await
            .expect("Failed to build test application");
        let port = app.port();
        let store = app.store().clone();

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            store,
        }
    }
}

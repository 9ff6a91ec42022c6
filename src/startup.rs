use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::CatalogConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::{seed_products_if_empty, ProductStore};

#[derive(Clone)]
pub struct AppState {
    pub config: CatalogConfig,
    pub store: ProductStore,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: CatalogConfig) -> Result<Self, AppError> {
        let store = ProductStore::connect(&config).await;

        // Best-effort demo seeding; runs before the listener starts serving
        // and never blocks startup.
        if let Err(e) = seed_products_if_empty(&store).await {
            tracing::warn!(error = %e, "Product seeding failed");
        }

        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = Router::new()
            .route("/", get(handlers::read_root))
            .route("/api/categories", get(handlers::get_categories))
            .route(
                "/api/products",
                get(handlers::list_products).post(handlers::create_product),
            )
            .route("/test", get(handlers::test_database))
            .layer(TraceLayer::new_for_http())
            .layer(
                // Consumed directly by a browser frontend with no gateway in
                // front, so CORS is wide open.
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(anyhow::Error::new(e))
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| AppError::from(anyhow::Error::new(e)))?
            .port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn store(&self) -> &ProductStore {
        &self.state.store
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

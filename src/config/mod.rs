use std::env;

/// Runtime configuration, read from the environment.
///
/// `DATABASE_URL` is deliberately optional: the service starts and serves
/// traffic without a store, degrading reads to a demo response.
/// `DATABASE_NAME` stays optional here too so the diagnostic endpoint can
/// report whether it was actually set; the store applies the default.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl CatalogConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        CatalogConfig {
            port,
            database_url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            database_name: env::var("DATABASE_NAME").ok().filter(|s| !s.is_empty()),
        }
    }
}

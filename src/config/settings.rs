use serde::Deserialize;
use crate::common::pagination::PageConfig;
use crate::config::env::{self, EnvKey};

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub orders_page: PageConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        let defaults = PageConfig::default();

        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url: env::get(EnvKey::DatabaseUrl)?,
            database_max_connections: env::get_parsed(EnvKey::DatabaseMaxConnections, 20),
            jwt_secret: env::get(EnvKey::JwtSecret)?,
            orders_page: PageConfig::new(
                env::get_parsed(EnvKey::OrdersPageSize, defaults.page_size),
                env::get_parsed(EnvKey::OrdersMaxPageSize, defaults.max_page_size),
            ),
        })
    }
}

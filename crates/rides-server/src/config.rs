use anyhow::Result;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub log_level: String,
    pub db_max_connections: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8010".to_string())
            .parse()
            .unwrap_or(8010);
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);

        Ok(Self {
            database_url,
            port,
            log_level,
            db_max_connections,
        })
    }
}

// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub database_name: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let mongodb_uri = env::var("MONGODB_URI")
            .expect("MONGODB_URI must be set");

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "quiz".to_string());

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            mongodb_uri,
            database_name,
            rust_log,
        }
    }
}

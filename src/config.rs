use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        search_endpoint: get_env_or_default("SEARCH_ENDPOINT", DEFAULT_SEARCH_ENDPOINT),
    }
});

pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://127.0.0.1:8000";

pub struct Config {
    /// Base URL of the backend serving `/search/`.
    pub search_endpoint: String,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

use crate::util::env::{get_env_or, load_dotenv};

pub mod db;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DBConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone)]
pub struct DBConfig {
    pub path: String,
    pub pool_size: u32,
}

#[derive(Debug, Clone)]
pub struct SearchConfig {
    // Completion lists in chat clients top out around this size,
    // so the store never returns more candidates than this.
    pub limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        AppConfig {
            db: DBConfig::from_env(),
            search: SearchConfig::from_env(),
        }
    }
}

impl DBConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let path = get_env_or("TAGS_DATABASE_PATH", "tags.db".to_string()).unwrap();
        let pool_size = get_env_or("TAGS_DATABASE_POOL_SIZE", 5).unwrap();

        DBConfig { path, pool_size }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        load_dotenv();

        let limit = get_env_or("TAGS_SEARCH_LIMIT", 25).unwrap();

        SearchConfig { limit }
    }
}

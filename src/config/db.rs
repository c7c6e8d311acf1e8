use ::anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::ops::Deref;
use std::str::FromStr;

pub struct DB {
    pub pool: SqlitePool,
}

impl DB {
    // Create a single connection pool for SQLx that is shared for the lifetime
    // of the module. This prevents the need to open a new connection for every
    // command invocation, which would be wasteful.
    pub async fn new(path: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(path)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .connect_with(options)
            .await?;
        Ok(DB { pool })
    }

    // Safe to run on every startup: creates the table only when it is absent
    // and never alters or drops existing data.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tags (
                tag_name TEXT NOT NULL,
                tag_guild_id INTEGER NOT NULL,
                tag_content TEXT NOT NULL,
                last_edited_by INTEGER NOT NULL,
                last_edited_at INTEGER NOT NULL,
                PRIMARY KEY (tag_name, tag_guild_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

impl Deref for DB {
    type Target = SqlitePool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

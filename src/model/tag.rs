use serde::Serialize;
use sqlx::FromRow;

// which Rust types correspond to which sqlite column types:
// https://docs.rs/sqlx/latest/sqlx/sqlite/types/index.html
#[derive(Debug, Serialize, FromRow, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub guild_id: i64,
    pub content: String,
    pub last_edited_by: i64,
    /// Epoch seconds of the originating request, not wall clock at write time.
    pub last_edited_at: i64,
}

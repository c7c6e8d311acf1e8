use crate::errors::{invalid_name, TagResult};
use crate::model::tag::Tag;
use sqlx::{query, query_as, query_scalar, SqlitePool};

/// Durable per-guild tag storage with audit metadata.
///
/// Tag names are unique per guild; `set` is the only mutator and always leaves
/// exactly one live row for its key. Absence of a tag is an ordinary result
/// (`Ok(None)`), never an error.
pub struct TagStore {
    pool: SqlitePool,
    search_limit: u32,
}

impl TagStore {
    pub fn new(pool: SqlitePool, search_limit: u32) -> Self {
        Self { pool, search_limit }
    }

    /// Creates or fully replaces the tag for (`name`, `guild_id`).
    ///
    /// The replace runs as one transaction, so a concurrent read observes
    /// either the old row or the new one, never a transient absence. There is
    /// no merge and no history: content, editor and timestamp are all
    /// overwritten.
    pub async fn set(
        &self,
        guild_id: i64,
        name: &str,
        content: &str,
        editor_id: i64,
        edited_at: i64,
    ) -> TagResult<Tag> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid_name(name));
        }

        let mut tx = self.pool.begin().await?;

        query("DELETE FROM tags WHERE tag_name = ? AND tag_guild_id = ?")
            .bind(name)
            .bind(guild_id)
            .execute(&mut *tx)
            .await?;

        query(
            r#"
            INSERT INTO tags (tag_name, tag_guild_id, tag_content, last_edited_by, last_edited_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(guild_id)
        .bind(content)
        .bind(editor_id)
        .bind(edited_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Tag {
            name: name.to_string(),
            guild_id,
            content: content.to_string(),
            last_edited_by: editor_id,
            last_edited_at: edited_at,
        })
    }

    /// Exact lookup by trimmed name; returns the content alone.
    pub async fn get(&self, guild_id: i64, name: &str) -> TagResult<Option<String>> {
        let content = query_scalar::<_, String>(
            "SELECT tag_content FROM tags WHERE tag_name = ? AND tag_guild_id = ?",
        )
        .bind(name.trim())
        .bind(guild_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(content)
    }

    /// Tag names in the guild containing `partial` as a substring; an empty
    /// `partial` returns all names. Ordered lexically, capped at the
    /// configured completion-list limit.
    pub async fn search(&self, guild_id: i64, partial: &str) -> TagResult<Vec<String>> {
        let pattern = format!("%{}%", partial);

        let names = query_scalar::<_, String>(
            r#"
            SELECT tag_name FROM tags
            WHERE tag_guild_id = ? AND (tag_name LIKE ? OR ? = '')
            ORDER BY tag_name
            LIMIT ?
            "#,
        )
        .bind(guild_id)
        .bind(pattern)
        .bind(partial)
        .bind(self.search_limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(names)
    }

    /// Same lookup as [`get`](Self::get) but returns the full row for
    /// metadata display.
    pub async fn info(&self, guild_id: i64, name: &str) -> TagResult<Option<Tag>> {
        let tag = query_as::<_, Tag>(
            r#"
            SELECT tag_name AS name,
                   tag_guild_id AS guild_id,
                   tag_content AS content,
                   last_edited_by,
                   last_edited_at
            FROM tags
            WHERE tag_name = ? AND tag_guild_id = ?
            "#,
        )
        .bind(name.trim())
        .bind(guild_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tag)
    }
}

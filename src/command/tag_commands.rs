use crate::errors::TagResult;
use crate::service::tag_store::TagStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::error;

/// Context of the invoking chat command, as handed over by the host framework.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub guild_id: i64,
    pub user_id: i64,
    /// Creation time of the originating request; `set` stamps the row with
    /// this, not with the wall clock at write time.
    pub created_at: DateTime<Utc>,
}

/// Outcome of a text-collection form: either the submitted text together with
/// the acknowledgement handle for the submission, or a cancellation (the user
/// closed the dialog, or the host timed it out).
pub enum PromptOutcome<A> {
    Submitted { text: String, ack: A },
    Cancelled,
}

/// Interactive form collection, implemented by the host framework (e.g. as a
/// modal dialog). The host bounds the content length; this crate does not.
#[async_trait]
pub trait ContentPrompt {
    type Ack: Send;

    /// Presents a text form pre-filled with `default`. `edited` tells the
    /// host whether to title the form as an edit or a new definition.
    async fn collect(&self, default: &str, edited: bool) -> PromptOutcome<Self::Ack>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub avatar_url: String,
}

/// Resolves a stored editor id to a displayable identity.
#[async_trait]
pub trait UserDirectory {
    async fn profile(&self, user_id: i64) -> anyhow::Result<UserProfile>;
}

/// A tag prepared for metadata display. `editor` is `None` when the directory
/// lookup failed; the raw id stays available in the store either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCard {
    pub name: String,
    pub content: String,
    pub last_edited_at: i64,
    pub editor: Option<UserProfile>,
}

/// What the host should say back to the user. Rendering (plain message,
/// embed, ephemerality) is the host's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Saved,
    Content(String),
    Info(TagCard),
    NoSuchTag,
}

pub struct TagCommands {
    store: Arc<TagStore>,
}

impl TagCommands {
    pub fn new(store: Arc<TagStore>) -> Self {
        Self { store }
    }

    /// The `set` flow: look up the old content to pre-fill the form, collect
    /// the new text, persist it, and hand back the reply plus the form's
    /// acknowledgement handle. A cancelled form writes nothing and yields
    /// `None`.
    ///
    /// The pre-fill read is a courtesy and is not transactional with the
    /// later write: two simultaneous edits of the same tag resolve to last
    /// write wins, and the first user may have seen a stale pre-fill.
    pub async fn set<P: ContentPrompt>(
        &self,
        ctx: CommandContext,
        name: &str,
        prompt: &P,
    ) -> TagResult<Option<(Reply, P::Ack)>> {
        let name = name.trim();
        let old_content = self.store.get(ctx.guild_id, name).await?;
        let edited = old_content.is_some();

        match prompt.collect(old_content.as_deref().unwrap_or(""), edited).await {
            PromptOutcome::Submitted { text, ack } => {
                self.store
                    .set(ctx.guild_id, name, &text, ctx.user_id, ctx.created_at.timestamp())
                    .await?;
                Ok(Some((Reply::Saved, ack)))
            }
            PromptOutcome::Cancelled => Ok(None),
        }
    }

    pub async fn get(&self, ctx: CommandContext, name: &str) -> TagResult<Reply> {
        Ok(match self.store.get(ctx.guild_id, name).await? {
            Some(content) => Reply::Content(content),
            None => Reply::NoSuchTag,
        })
    }

    pub async fn info<D: UserDirectory>(
        &self,
        ctx: CommandContext,
        name: &str,
        directory: &D,
    ) -> TagResult<Reply> {
        let Some(tag) = self.store.info(ctx.guild_id, name).await? else {
            return Ok(Reply::NoSuchTag);
        };

        let editor = match directory.profile(tag.last_edited_by).await {
            Ok(profile) => Some(profile),
            Err(err) => {
                error!("Cannot resolve editor {}: {:?}", tag.last_edited_by, err);
                None
            }
        };

        Ok(Reply::Info(TagCard {
            name: tag.name,
            content: tag.content,
            last_edited_at: tag.last_edited_at,
            editor,
        }))
    }

    /// Name completion for the fragment the user has typed so far.
    pub async fn autocomplete(&self, ctx: CommandContext, current: &str) -> TagResult<Vec<String>> {
        self.store.search(ctx.guild_id, current).await
    }
}

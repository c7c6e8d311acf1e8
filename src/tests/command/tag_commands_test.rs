#[cfg(test)]
mod tests {
    use crate::command::tag_commands::{
        CommandContext, ContentPrompt, PromptOutcome, Reply, TagCommands, UserDirectory,
        UserProfile,
    };
    use crate::config::db::DB;
    use crate::service::tag_store::TagStore;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::DateTime;
    use std::sync::{Arc, Mutex};

    async fn setup() -> (Arc<TagStore>, TagCommands) {
        let db = DB::new(":memory:", 1).await.unwrap();
        db.ensure_schema().await.unwrap();
        let store = Arc::new(TagStore::new(db.pool.clone(), 25));
        (store.clone(), TagCommands::new(store))
    }

    fn ctx(guild_id: i64, user_id: i64, at: i64) -> CommandContext {
        CommandContext {
            guild_id,
            user_id,
            created_at: DateTime::from_timestamp(at, 0).unwrap(),
        }
    }

    /// Submits fixed text and records the pre-fill it was shown.
    struct SubmitPrompt {
        text: &'static str,
        seen: Mutex<Option<(String, bool)>>,
    }

    impl SubmitPrompt {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                seen: Mutex::new(None),
            }
        }

        fn seen(&self) -> (String, bool) {
            self.seen.lock().unwrap().clone().unwrap()
        }
    }

    #[async_trait]
    impl ContentPrompt for SubmitPrompt {
        type Ack = u32;

        async fn collect(&self, default: &str, edited: bool) -> PromptOutcome<u32> {
            *self.seen.lock().unwrap() = Some((default.to_string(), edited));
            PromptOutcome::Submitted {
                text: self.text.to_string(),
                ack: 7,
            }
        }
    }

    struct CancelPrompt;

    #[async_trait]
    impl ContentPrompt for CancelPrompt {
        type Ack = u32;

        async fn collect(&self, _default: &str, _edited: bool) -> PromptOutcome<u32> {
            PromptOutcome::Cancelled
        }
    }

    struct StaticDirectory;

    #[async_trait]
    impl UserDirectory for StaticDirectory {
        async fn profile(&self, user_id: i64) -> anyhow::Result<UserProfile> {
            Ok(UserProfile {
                name: format!("user-{}", user_id),
                avatar_url: "https://cdn.example/avatar.png".to_string(),
            })
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl UserDirectory for FailingDirectory {
        async fn profile(&self, _user_id: i64) -> anyhow::Result<UserProfile> {
            Err(anyhow!("user service down"))
        }
    }

    #[tokio::test]
    async fn test_set_new_tag_prompts_with_empty_default() {
        let (store, commands) = setup().await;

        let prompt = SubmitPrompt::new("hello there");
        let result = commands.set(ctx(1, 42, 1000), "greet", &prompt).await.unwrap();

        assert_eq!(prompt.seen(), ("".to_string(), false));
        assert_eq!(result, Some((Reply::Saved, 7)));

        let tag = store.info(1, "greet").await.unwrap().unwrap();
        assert_eq!(tag.content, "hello there");
        assert_eq!(tag.last_edited_by, 42);
        assert_eq!(tag.last_edited_at, 1000);
    }

    #[tokio::test]
    async fn test_set_existing_tag_prefills_previous_content() {
        let (store, commands) = setup().await;
        store.set(1, "greet", "old text", 1, 500).await.unwrap();

        let prompt = SubmitPrompt::new("new text");
        // Untrimmed user input resolves to the same key.
        commands.set(ctx(1, 42, 1000), " greet ", &prompt).await.unwrap();

        assert_eq!(prompt.seen(), ("old text".to_string(), true));

        let tag = store.info(1, "greet").await.unwrap().unwrap();
        assert_eq!(tag.content, "new text");
        assert_eq!(tag.last_edited_by, 42);
        assert_eq!(tag.last_edited_at, 1000);
    }

    #[tokio::test]
    async fn test_cancelled_prompt_writes_nothing() {
        let (store, commands) = setup().await;

        let result = commands.set(ctx(1, 42, 1000), "greet", &CancelPrompt).await.unwrap();

        assert!(result.is_none());
        assert_eq!(store.get(1, "greet").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_returns_content_or_no_such_tag() {
        let (store, commands) = setup().await;
        store.set(1, "greet", "hello", 1, 100).await.unwrap();

        let reply = commands.get(ctx(1, 42, 1000), "greet").await.unwrap();
        assert_eq!(reply, Reply::Content("hello".to_string()));

        let reply = commands.get(ctx(1, 42, 1000), "missing").await.unwrap();
        assert_eq!(reply, Reply::NoSuchTag);
    }

    #[tokio::test]
    async fn test_info_resolves_the_editor_profile() {
        let (store, commands) = setup().await;
        store.set(1, "greet", "hello", 42, 1000).await.unwrap();

        let reply = commands
            .info(ctx(1, 9, 2000), "greet", &StaticDirectory)
            .await
            .unwrap();

        let Reply::Info(card) = reply else {
            panic!("expected Reply::Info, got {:?}", reply);
        };
        assert_eq!(card.name, "greet");
        assert_eq!(card.content, "hello");
        assert_eq!(card.last_edited_at, 1000);
        assert_eq!(
            card.editor,
            Some(UserProfile {
                name: "user-42".to_string(),
                avatar_url: "https://cdn.example/avatar.png".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_info_degrades_when_the_directory_fails() {
        let (store, commands) = setup().await;
        store.set(1, "greet", "hello", 42, 1000).await.unwrap();

        let reply = commands
            .info(ctx(1, 9, 2000), "greet", &FailingDirectory)
            .await
            .unwrap();

        let Reply::Info(card) = reply else {
            panic!("expected Reply::Info, got {:?}", reply);
        };
        assert_eq!(card.editor, None);
        assert_eq!(card.content, "hello");
    }

    #[tokio::test]
    async fn test_info_for_unknown_tag_is_no_such_tag() {
        let (_store, commands) = setup().await;

        let reply = commands
            .info(ctx(1, 9, 2000), "missing", &StaticDirectory)
            .await
            .unwrap();
        assert_eq!(reply, Reply::NoSuchTag);
    }

    #[tokio::test]
    async fn test_autocomplete_forwards_search_results() {
        let (store, commands) = setup().await;
        store.set(1, "alpha", "a", 1, 100).await.unwrap();
        store.set(1, "alphabet", "b", 1, 100).await.unwrap();
        store.set(1, "beta", "c", 1, 100).await.unwrap();

        let names = commands.autocomplete(ctx(1, 9, 2000), "alpha").await.unwrap();
        assert_eq!(names, vec!["alpha", "alphabet"]);
    }
}

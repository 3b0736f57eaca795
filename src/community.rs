//! Community forum: posts with nested replies over the local store.
//!
//! The whole post list is held in memory and written back to
//! `communityPosts` after each mutation. Mutations take the acting
//! `CurrentUser` explicitly; edit and delete are allowed for the author only.

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Change, CommunityPost, CommunityReply, CurrentUser, AI_AVATAR_SENTINEL,
};
use crate::store::{self, keys, SharedStore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommunityError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Content is required")]
    EmptyContent,

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Only the author can change {entity} {id}")]
    NotAuthor { entity: &'static str, id: String },
}

/// Whitespace-only input is rejected; accepted text is kept as typed.
fn require_text(value: &str, err: CommunityError) -> Result<String, CommunityError> {
    if value.trim().is_empty() {
        return Err(err);
    }
    Ok(value.to_string())
}

// ═══════════════════════════════════════════
// Seed data
// ═══════════════════════════════════════════

/// Posts shown on first run, dated relative to `now`. The sentinel avatar is
/// replaced by `ai_avatar` (empty string when none is cached yet).
pub fn seed_posts(now: DateTime<Utc>, ai_avatar: Option<&str>) -> Vec<CommunityPost> {
    let days_ago = |d: i64| now - Duration::days(d);
    let resolve = |avatar: Option<&str>| -> Option<String> {
        match avatar {
            Some(AI_AVATAR_SENTINEL) => Some(ai_avatar.unwrap_or_default().to_string()),
            other => other.map(str::to_string),
        }
    };

    vec![
        CommunityPost {
            id: "post-1".into(),
            author_id: "user-2".into(),
            author_name: "Jane Smith".into(),
            author_avatar: resolve(Some(AI_AVATAR_SENTINEL)),
            title: "Does anyone have tips for dealing with sensitive teeth?".into(),
            content: "Lately, drinking cold water has been really painful. I'm using sensitive \
                      toothpaste but it's not helping much. Any advice would be appreciated \
                      before I see my dentist next week!"
                .into(),
            created_at: days_ago(2),
            updated_at: days_ago(2),
            views: 0,
            replies: vec![CommunityReply {
                id: "reply-1".into(),
                author_id: "user-1".into(),
                author_name: "John Doe".into(),
                author_avatar: None,
                content: "I had the same issue! My dentist recommended avoiding acidic foods \
                          and drinks for a while, which seemed to help. Hope you feel better soon."
                    .into(),
                created_at: days_ago(1),
                updated_at: days_ago(1),
            }],
        },
        CommunityPost {
            id: "post-2".into(),
            author_id: "user-1".into(),
            author_name: "John Doe".into(),
            author_avatar: None,
            title: "Just had my wisdom teeth removed - recovery tips?".into(),
            content: "The procedure went well, but I'm pretty sore. What did everyone eat \
                      during their recovery? I'm already tired of soup!"
                .into(),
            created_at: days_ago(5),
            updated_at: days_ago(5),
            views: 0,
            replies: vec![],
        },
    ]
}

/// Image to render for an author. The sentinel maps to the assistant
/// avatar; empty references render the placeholder icon (`None`).
pub fn resolve_avatar<'a>(author_avatar: Option<&'a str>, ai_avatar: Option<&'a str>) -> Option<&'a str> {
    let avatar = match author_avatar? {
        AI_AVATAR_SENTINEL => ai_avatar?,
        other => other,
    };
    (!avatar.is_empty()).then_some(avatar)
}

/// Relative timestamp, e.g. "3 days ago".
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    if seconds < 5 {
        return "just now".to_string();
    }

    let secs = seconds as f64;
    let units: [(f64, &str); 5] = [
        (31_536_000.0, "year"),
        (2_592_000.0, "month"),
        (86_400.0, "day"),
        (3_600.0, "hour"),
        (60.0, "minute"),
    ];
    for (unit_secs, name) in units {
        let interval = secs / unit_secs;
        if interval > 1.0 {
            let n = interval.floor() as i64;
            return plural(n, name);
        }
    }
    plural(seconds, "second")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}

// ═══════════════════════════════════════════
// Store
// ═══════════════════════════════════════════

pub struct PostStore {
    store: SharedStore,
    posts: Vec<CommunityPost>,
    ai_avatar: Option<String>,
}

impl PostStore {
    /// Load posts; absent or unreadable data falls back to the seed list,
    /// which is then written back.
    pub fn load(store: SharedStore) -> Self {
        let ai_avatar = store::read_value(store.as_ref(), keys::ASSISTANT_AVATAR);
        let saved: Option<Vec<CommunityPost>> =
            store::load_json(store.as_ref(), keys::COMMUNITY_POSTS);

        let (posts, seeded) = match saved {
            Some(posts) => (posts, false),
            None => (seed_posts(Utc::now(), ai_avatar.as_deref()), true),
        };
        tracing::debug!(count = posts.len(), seeded, "Loaded community posts");

        let this = Self {
            store,
            posts,
            ai_avatar,
        };
        if seeded {
            this.persist();
        }
        this
    }

    /// Posts in collection order (newest created first for local posts).
    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Option<&CommunityPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// The cached assistant avatar, as read at load time.
    pub fn ai_avatar(&self) -> Option<&str> {
        self.ai_avatar.as_deref()
    }

    /// Reply by id, with its parent post. Scans every post's replies.
    pub fn find_reply(&self, reply_id: &str) -> Option<(&CommunityPost, &CommunityReply)> {
        self.posts.iter().find_map(|post| {
            post.replies
                .iter()
                .find(|r| r.id == reply_id)
                .map(|reply| (post, reply))
        })
    }

    /// All posts newest-created first, keeping those whose title or content
    /// contains `query` case-insensitively. Empty query keeps everything.
    pub fn filter_posts(&self, query: &str) -> Vec<&CommunityPost> {
        let mut sorted: Vec<&CommunityPost> = self.posts.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if query.is_empty() {
            return sorted;
        }

        let needle = query.to_lowercase();
        sorted
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ───────────────────────────────────────
    // Posts
    // ───────────────────────────────────────

    pub fn create_post(
        &mut self,
        actor: &CurrentUser,
        title: &str,
        content: &str,
    ) -> Result<&CommunityPost, CommunityError> {
        let title = require_text(title, CommunityError::EmptyTitle)?;
        let content = require_text(content, CommunityError::EmptyContent)?;

        let now = Utc::now();
        let post = CommunityPost {
            id: format!("post-{}", Uuid::now_v7()),
            author_id: actor.id.clone(),
            author_name: actor.name.clone(),
            author_avatar: actor.avatar.clone(),
            title,
            content,
            created_at: now,
            updated_at: now,
            views: 0,
            replies: Vec::new(),
        };
        tracing::info!(post_id = %post.id, author = %actor.id, "Community post created");

        self.posts.insert(0, post);
        self.persist();
        Ok(&self.posts[0])
    }

    pub fn edit_post(
        &mut self,
        actor: &CurrentUser,
        post_id: &str,
        title: &str,
        content: &str,
    ) -> Result<Change, CommunityError> {
        let title = require_text(title, CommunityError::EmptyTitle)?;
        let content = require_text(content, CommunityError::EmptyContent)?;

        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            tracing::debug!(post_id, "Edit of unknown post ignored");
            return Ok(Change::NotFound);
        };
        ensure_author(actor, &post.author_id, "post", post_id)?;

        post.title = title;
        post.content = content;
        post.updated_at = Utc::now();
        self.persist();
        Ok(Change::Applied)
    }

    /// Remove a post together with all of its replies. Irreversible.
    pub fn delete_post(&mut self, actor: &CurrentUser, post_id: &str) -> Result<Change, CommunityError> {
        let Some(pos) = self.posts.iter().position(|p| p.id == post_id) else {
            tracing::debug!(post_id, "Delete of unknown post ignored");
            return Ok(Change::NotFound);
        };
        ensure_author(actor, &self.posts[pos].author_id, "post", post_id)?;

        let removed = self.posts.remove(pos);
        tracing::info!(post_id, replies = removed.replies.len(), "Community post deleted");
        self.persist();
        Ok(Change::Applied)
    }

    /// Count one opening of the post's detail view. Not de-duplicated.
    pub fn increment_views(&mut self, post_id: &str) -> Change {
        let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) else {
            return Change::NotFound;
        };
        post.views += 1;
        self.persist();
        Change::Applied
    }

    // ───────────────────────────────────────
    // Replies
    // ───────────────────────────────────────

    pub fn add_reply(
        &mut self,
        actor: &CurrentUser,
        post_id: &str,
        content: &str,
    ) -> Result<&CommunityReply, CommunityError> {
        let content = require_text(content, CommunityError::EmptyContent)?;
        let Some(pos) = self.posts.iter().position(|p| p.id == post_id) else {
            return Err(CommunityError::PostNotFound(post_id.to_string()));
        };

        let now = Utc::now();
        let reply = CommunityReply {
            id: format!("reply-{}", Uuid::now_v7()),
            author_id: actor.id.clone(),
            author_name: actor.name.clone(),
            author_avatar: actor.avatar.clone(),
            content,
            created_at: now,
            updated_at: now,
        };
        tracing::info!(post_id, reply_id = %reply.id, "Reply added");

        let replies = &mut self.posts[pos].replies;
        replies.push(reply);
        let index = replies.len() - 1;
        self.persist();
        Ok(&self.posts[pos].replies[index])
    }

    pub fn edit_reply(
        &mut self,
        actor: &CurrentUser,
        reply_id: &str,
        content: &str,
    ) -> Result<Change, CommunityError> {
        let content = require_text(content, CommunityError::EmptyContent)?;

        let Some(reply) = self
            .posts
            .iter_mut()
            .flat_map(|p| p.replies.iter_mut())
            .find(|r| r.id == reply_id)
        else {
            tracing::debug!(reply_id, "Edit of unknown reply ignored");
            return Ok(Change::NotFound);
        };
        ensure_author(actor, &reply.author_id, "reply", reply_id)?;

        reply.content = content;
        reply.updated_at = Utc::now();
        self.persist();
        Ok(Change::Applied)
    }

    pub fn delete_reply(&mut self, actor: &CurrentUser, reply_id: &str) -> Result<Change, CommunityError> {
        let location = self.posts.iter().enumerate().find_map(|(p, post)| {
            post.replies
                .iter()
                .position(|r| r.id == reply_id)
                .map(|r| (p, r))
        });
        let Some((p, r)) = location else {
            tracing::debug!(reply_id, "Delete of unknown reply ignored");
            return Ok(Change::NotFound);
        };
        ensure_author(actor, &self.posts[p].replies[r].author_id, "reply", reply_id)?;

        self.posts[p].replies.remove(r);
        self.persist();
        Ok(Change::Applied)
    }

    fn persist(&self) {
        store::save_json(self.store.as_ref(), keys::COMMUNITY_POSTS, &self.posts);
    }
}

fn ensure_author(
    actor: &CurrentUser,
    author_id: &str,
    entity: &'static str,
    id: &str,
) -> Result<(), CommunityError> {
    if actor.id != author_id {
        tracing::warn!(actor = %actor.id, entity, id, "Rejected change by non-author");
        return Err(CommunityError::NotAuthor {
            entity,
            id: id.to_string(),
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};

    fn me() -> CurrentUser {
        CurrentUser::local()
    }

    fn jane() -> CurrentUser {
        CurrentUser::new("user-2", "Jane Smith")
    }

    fn seeded() -> (Arc<MemoryStore>, PostStore) {
        let store = Arc::new(MemoryStore::new());
        let posts = PostStore::load(store.clone());
        (store, posts)
    }

    // ───────────────────────────────────────
    // loading
    // ───────────────────────────────────────

    #[test]
    fn first_load_seeds_and_persists() {
        let (store, posts) = seeded();
        assert_eq!(posts.posts().len(), 2);
        assert!(store.get(keys::COMMUNITY_POSTS).unwrap().is_some());
    }

    #[test]
    fn seed_resolves_avatar_sentinel() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::ASSISTANT_AVATAR, "data:image/png;base64,AAAA").unwrap();
        let posts = PostStore::load(store);
        let jane_post = posts.get("post-1").unwrap();
        assert_eq!(
            jane_post.author_avatar.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn seed_without_cached_avatar_uses_empty_reference() {
        let (_, posts) = seeded();
        assert_eq!(posts.get("post-1").unwrap().author_avatar.as_deref(), Some(""));
        assert!(posts.get("post-2").unwrap().author_avatar.is_none());
    }

    #[test]
    fn posts_round_trip_through_store() {
        let (store, mut posts) = seeded();
        posts.create_post(&me(), "Flossing", "Which floss do you use?").unwrap();
        posts.add_reply(&jane(), "post-2", "Smoothies worked for me").unwrap();
        posts.increment_views("post-1");

        let reloaded = PostStore::load(store);
        assert_eq!(reloaded.posts(), posts.posts());
    }

    #[test]
    fn corrupt_data_falls_back_to_seed() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::COMMUNITY_POSTS, "[{\"id\": 3}]").unwrap();
        let posts = PostStore::load(store);
        assert_eq!(posts.posts().len(), 2);
        assert!(posts.get("post-1").is_some());
    }

    #[test]
    fn saved_empty_list_is_respected() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::COMMUNITY_POSTS, "[]").unwrap();
        let posts = PostStore::load(store);
        assert!(posts.posts().is_empty());
    }

    // ───────────────────────────────────────
    // posts
    // ───────────────────────────────────────

    #[test]
    fn create_post_sets_author_and_timestamps() {
        let (_, mut posts) = seeded();
        let post = posts.create_post(&me(), "Braces", "Any tips?").unwrap().clone();
        assert_eq!(post.author_id, "user-1");
        assert_eq!(post.author_name, "John Doe");
        assert_eq!(post.title, "Braces");
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(post.views, 0);
        assert!(post.replies.is_empty());
        assert_eq!(posts.posts()[0].id, post.id);
    }

    #[test]
    fn accepted_text_keeps_its_whitespace() {
        let (_, mut posts) = seeded();
        let post = posts
            .create_post(&me(), "  Braces  ", "Line one\n\n  indented\n")
            .unwrap()
            .clone();
        assert_eq!(post.title, "  Braces  ");
        assert_eq!(post.content, "Line one\n\n  indented\n");

        let reply = posts.add_reply(&me(), &post.id, " thanks! ").unwrap();
        assert_eq!(reply.content, " thanks! ");
    }

    #[test]
    fn storage_failure_keeps_forum_working_in_memory() {
        let store = Arc::new(MemoryStore::failing());
        let mut posts = PostStore::load(store.clone());
        assert_eq!(posts.posts().len(), 2);

        let id = posts.create_post(&me(), "Offline", "Still works").unwrap().id.clone();
        let reply_id = posts.add_reply(&jane(), &id, "Reply").unwrap().id.clone();

        let post = posts.get(&id).unwrap();
        assert_eq!(post.replies.len(), 1);
        assert_eq!(post.replies[0].id, reply_id);
        assert_eq!(posts.increment_views(&id), Change::Applied);

        store.set_failing(false);
        assert!(store.is_empty());
    }

    #[test]
    fn blank_title_is_rejected_without_mutation() {
        let (_, mut posts) = seeded();
        let before = posts.posts().len();
        assert_eq!(
            posts.create_post(&me(), "   ", "content").unwrap_err(),
            CommunityError::EmptyTitle
        );
        assert_eq!(
            posts.create_post(&me(), "title", "\n\t").unwrap_err(),
            CommunityError::EmptyContent
        );
        assert_eq!(posts.posts().len(), before);
    }

    #[test]
    fn edit_post_by_author_updates_fields() {
        let (_, mut posts) = seeded();
        let original = posts.get("post-2").unwrap().clone();
        posts.increment_views("post-2");

        let change = posts.edit_post(&me(), "post-2", "New title", "New content").unwrap();
        assert_eq!(change, Change::Applied);

        let edited = posts.get("post-2").unwrap();
        assert_eq!(edited.title, "New title");
        assert_eq!(edited.content, "New content");
        assert_eq!(edited.created_at, original.created_at);
        assert!(edited.updated_at > original.updated_at);
        assert_eq!(edited.views, 1);
        assert_eq!(edited.replies, original.replies);
    }

    #[test]
    fn edit_post_by_other_user_is_rejected() {
        let (_, mut posts) = seeded();
        let err = posts.edit_post(&me(), "post-1", "Mine now", "x").unwrap_err();
        assert!(matches!(err, CommunityError::NotAuthor { entity: "post", .. }));
        assert_eq!(
            posts.get("post-1").unwrap().title,
            "Does anyone have tips for dealing with sensitive teeth?"
        );
    }

    #[test]
    fn edit_unknown_post_is_noop() {
        let (_, mut posts) = seeded();
        assert_eq!(
            posts.edit_post(&me(), "post-404", "t", "c").unwrap(),
            Change::NotFound
        );
    }

    #[test]
    fn delete_post_removes_its_replies() {
        let (_, mut posts) = seeded();
        posts.add_reply(&jane(), "post-2", "Ice cream!").unwrap();
        let reply_ids: Vec<String> = posts
            .get("post-2")
            .unwrap()
            .replies
            .iter()
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(reply_ids.len(), 1);

        assert_eq!(posts.delete_post(&me(), "post-2").unwrap(), Change::Applied);
        assert!(posts.get("post-2").is_none());
        for id in &reply_ids {
            assert!(posts.find_reply(id).is_none());
            assert_eq!(posts.edit_reply(&jane(), id, "edit").unwrap(), Change::NotFound);
        }
    }

    #[test]
    fn delete_post_by_other_user_is_rejected() {
        let (_, mut posts) = seeded();
        assert!(posts.delete_post(&me(), "post-1").is_err());
        assert!(posts.get("post-1").is_some());
        assert_eq!(posts.delete_post(&me(), "post-404").unwrap(), Change::NotFound);
    }

    #[test]
    fn increment_views_counts_every_open() {
        let (_, mut posts) = seeded();
        let before = posts.get("post-1").unwrap().views;
        posts.increment_views("post-1");
        posts.increment_views("post-1");
        assert_eq!(posts.get("post-1").unwrap().views, before + 2);
        assert_eq!(posts.increment_views("post-404"), Change::NotFound);
    }

    // ───────────────────────────────────────
    // replies
    // ───────────────────────────────────────

    #[test]
    fn add_reply_appends_in_order() {
        let (_, mut posts) = seeded();
        posts.add_reply(&me(), "post-1", "second").unwrap();
        posts.add_reply(&jane(), "post-1", "third").unwrap();
        let contents: Vec<_> = posts
            .get("post-1")
            .unwrap()
            .replies
            .iter()
            .map(|r| r.content.as_str())
            .collect();
        assert_eq!(contents.len(), 3);
        assert_eq!(&contents[1..], &["second", "third"]);
    }

    #[test]
    fn add_reply_validates_content_and_post() {
        let (_, mut posts) = seeded();
        assert_eq!(
            posts.add_reply(&me(), "post-1", "  ").unwrap_err(),
            CommunityError::EmptyContent
        );
        assert_eq!(
            posts.add_reply(&me(), "post-404", "hello").unwrap_err(),
            CommunityError::PostNotFound("post-404".into())
        );
        assert_eq!(posts.get("post-1").unwrap().replies.len(), 1);
    }

    #[test]
    fn edit_reply_is_author_only() {
        let (_, mut posts) = seeded();
        assert!(posts.edit_reply(&jane(), "reply-1", "hijack").is_err());
        assert_eq!(
            posts.edit_reply(&me(), "reply-1", "Updated advice").unwrap(),
            Change::Applied
        );
        let (parent, reply) = posts.find_reply("reply-1").unwrap();
        assert_eq!(parent.id, "post-1");
        assert_eq!(reply.content, "Updated advice");
        assert!(reply.updated_at > reply.created_at);
    }

    #[test]
    fn delete_reply_leaves_siblings() {
        let (_, mut posts) = seeded();
        let kept = posts.add_reply(&jane(), "post-1", "keep me").unwrap().id.clone();

        assert!(posts.delete_reply(&jane(), "reply-1").is_err());
        assert_eq!(posts.delete_reply(&me(), "reply-1").unwrap(), Change::Applied);
        assert_eq!(posts.delete_reply(&me(), "reply-1").unwrap(), Change::NotFound);

        let replies = &posts.get("post-1").unwrap().replies;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].id, kept);
    }

    // ───────────────────────────────────────
    // search
    // ───────────────────────────────────────

    #[test]
    fn filter_matches_title_or_content_case_insensitively() {
        let (_, posts) = seeded();
        let hits = posts.filter_posts("SENSITIVE");
        assert_eq!(hits.len(), 1);
        assert_eq!(
            hits[0].title,
            "Does anyone have tips for dealing with sensitive teeth?"
        );

        let by_content = posts.filter_posts("soup");
        assert_eq!(by_content.len(), 1);
        assert_eq!(by_content[0].id, "post-2");
    }

    #[test]
    fn filter_excludes_wisdom_teeth_post_for_sensitive() {
        let (_, posts) = seeded();
        assert!(posts
            .filter_posts("sensitive")
            .iter()
            .all(|p| !p.title.contains("wisdom")));
    }

    #[test]
    fn empty_filter_returns_all_newest_first() {
        let (_, mut posts) = seeded();
        posts.create_post(&me(), "Newest", "just posted").unwrap();
        let ids: Vec<_> = posts.filter_posts("").iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(&ids[1..], &["post-1".to_string(), "post-2".to_string()]);
        assert_eq!(posts.filter_posts("").first().unwrap().title, "Newest");
    }

    // ───────────────────────────────────────
    // helpers
    // ───────────────────────────────────────

    #[test]
    fn resolve_avatar_cases() {
        let ai = Some("data:ai");
        assert_eq!(resolve_avatar(Some(AI_AVATAR_SENTINEL), ai), Some("data:ai"));
        assert_eq!(resolve_avatar(Some(AI_AVATAR_SENTINEL), None), None);
        assert_eq!(resolve_avatar(Some("data:user"), ai), Some("data:user"));
        assert_eq!(resolve_avatar(Some(""), ai), None);
        assert_eq!(resolve_avatar(None, ai), None);
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(2), now), "just now");
        assert_eq!(time_ago(now - Duration::seconds(30), now), "30 seconds ago");
        assert_eq!(time_ago(now - Duration::seconds(90), now), "1 minute ago");
        assert_eq!(time_ago(now - Duration::hours(5), now), "5 hours ago");
        assert_eq!(time_ago(now - Duration::hours(36), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::days(2) - Duration::hours(1), now), "2 days ago");
        assert_eq!(time_ago(now - Duration::days(65), now), "2 months ago");
        assert_eq!(time_ago(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn time_ago_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(time_ago(now + Duration::minutes(3), now), "just now");
    }
}

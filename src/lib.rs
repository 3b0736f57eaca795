pub mod assistant;
pub mod avatar; // Assistant avatar bootstrap
pub mod calendar;
pub mod community; // Community forum
pub mod config;
pub mod directory; // Clinic directory
pub mod home; // Disclaimer + home summary
pub mod journal; // Symptom journal
pub mod learn; // Article library
pub mod models;
pub mod store;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::assistant::GeminiClient;
use crate::avatar::AvatarBootstrap;
use crate::config::AssistantConfig;
use crate::store::{MemoryStore, SharedStore, SqliteStore};

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = open_store();
    let assistant = AssistantConfig::from_env();
    let avatar = bootstrap_avatar(&store, &assistant);

    let journal = journal::SymptomJournal::load(store.clone());
    let posts = community::PostStore::load(store.clone());
    let saved = learn::SavedArticles::load(store.clone());
    let summary = home::HomeSummary::collect(&store, &journal, &posts, &saved);

    tracing::info!(
        symptom_logs = summary.symptom_logs,
        community_posts = summary.community_posts,
        saved_articles = summary.saved_articles,
        needs_disclaimer = summary.needs_disclaimer,
        assistant_enabled = assistant.is_enabled(),
        avatar = ?avatar,
        "Local state ready"
    );
}

/// Open the on-disk store, or fall back to an in-memory one so the app
/// still runs (without persistence) when the data dir is unusable.
pub fn open_store() -> SharedStore {
    let path = config::store_path();
    match SqliteStore::open(&path) {
        Ok(store) => {
            tracing::debug!(path = %path.display(), "Opened local store");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Local store unavailable, using memory");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Avatar bootstrap step of startup. Skipped when no API key is configured.
pub fn bootstrap_avatar(store: &SharedStore, assistant: &AssistantConfig) -> Option<AvatarBootstrap> {
    if !assistant.is_enabled() {
        tracing::info!("Assistant not configured, skipping avatar bootstrap");
        return None;
    }
    match GeminiClient::new(assistant) {
        Ok(client) => Some(avatar::ensure_assistant_avatar(store.as_ref(), &client)),
        Err(e) => {
            tracing::warn!(error = %e, "Could not create assistant client");
            None
        }
    }
}

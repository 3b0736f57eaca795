//! Home screen: first-run disclaimer and the at-a-glance summary.
//!
//! The disclaimer is shown until acknowledged once. If storage cannot be
//! read the disclaimer is shown again rather than silently skipped.

use serde::Serialize;

use crate::community::PostStore;
use crate::journal::SymptomJournal;
use crate::learn::SavedArticles;
use crate::store::{self, keys, SharedStore};

pub const DISCLAIMER_TITLE: &str = "Important Disclaimer";

pub const DISCLAIMER_BODY: &[&str] = &[
    "This is an educational tool. The information provided, including responses from our AI \
     assistant, is not a substitute for professional dental advice.",
    "This AI cannot and will not make a diagnosis or give treatment advice. Please consult a \
     qualified dentist for any health concerns.",
];

// ---------------------------------------------------------------------------
// Onboarding
// ---------------------------------------------------------------------------

pub struct Onboarding;

impl Onboarding {
    pub fn needs_disclaimer(store: &SharedStore) -> bool {
        !store::read_flag(store.as_ref(), keys::SEEN_DISCLAIMER)
    }

    /// Record that the disclaimer was dismissed. A failed write only means
    /// it will be shown again next time.
    pub fn acknowledge(store: &SharedStore) {
        if store::write_flag(store.as_ref(), keys::SEEN_DISCLAIMER) {
            tracing::info!("Disclaimer acknowledged");
        }
    }
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Counts for the home header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeSummary {
    pub symptom_logs: usize,
    pub community_posts: usize,
    pub saved_articles: usize,
    pub has_assistant_avatar: bool,
    pub needs_disclaimer: bool,
}

impl HomeSummary {
    pub fn collect(
        store: &SharedStore,
        journal: &SymptomJournal,
        posts: &PostStore,
        saved: &SavedArticles,
    ) -> Self {
        Self {
            symptom_logs: journal.logs().len(),
            community_posts: posts.posts().len(),
            saved_articles: saved.count(),
            has_assistant_avatar: posts.ai_avatar().is_some_and(|a| !a.is_empty()),
            needs_disclaimer: Onboarding::needs_disclaimer(store),
        }
    }
}

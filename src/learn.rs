//! Learn library: the compiled-in article catalogue and the user's saved list.

use crate::models::{Article, ArticleLevel, Infographic, LearnTab};
use crate::store::{self, keys, SharedStore};

// ═══════════════════════════════════════════
// Catalogue
// ═══════════════════════════════════════════

pub static ARTICLES: [Article; 5] = [
    Article {
        id: 1,
        title: "Mastering Your Daily Oral Care Routine",
        level: ArticleLevel::Beginner,
        read_time_minutes: 5,
        body: "A strong oral hygiene routine is your first line of defence against cavities and gum disease. It is a consistent, detailed practice that keeps your mouth, teeth and gums healthy.\n\n\
### The Art of Brushing\n\n\
Hold a soft-bristled toothbrush at a 45-degree angle to the gums and use gentle, short, circular strokes on the outer and inner surfaces. Brush the chewing surfaces and your tongue. The whole process should take two full minutes.\n\n\
Use a fluoride toothpaste and replace your brush every three to four months, or sooner if the bristles fray.\n\n\
### The Necessity of Flossing\n\n\
Floss cleans the surfaces your brush cannot reach, between the teeth and under the gumline. Curve the floss into a C shape against each tooth and use a clean section for every gap. Floss picks, water flossers and interdental brushes are good alternatives.\n\n\
### Rinsing with Mouthwash\n\n\
An antimicrobial or fluoride mouthwash is a useful final step, but it supplements brushing and flossing rather than replacing them.",
        infographic: Some(Infographic::DailyRoutine),
    },
    Article {
        id: 2,
        title: "Understanding and Preventing Gum Disease",
        level: ArticleLevel::Intermediate,
        read_time_minutes: 8,
        body: "Periodontal (gum) disease is an infection that damages the soft tissue and, without treatment, the bone that supports your teeth. It often develops silently, with few early symptoms.\n\n\
### Stage 1: Gingivitis\n\n\
Plaque left on the teeth irritates the gums, which become red, swollen and bleed easily. At this stage the disease is completely reversible with a professional cleaning and diligent home care.\n\n\
### Stage 2: Periodontitis\n\n\
Untreated gingivitis lets the gum pull away from the teeth and form infected pockets. Bone and connective tissue break down, teeth can loosen and may eventually need to be removed.\n\n\
### Key Risk Factors\n\n\
Smoking, diabetes, hormonal changes, medications that cause dry mouth and genetics all raise your risk.\n\n\
### Prevention and Treatment\n\n\
Brush twice a day, floss daily and have regular check-ups. Early periodontitis is treated with scaling and root planing; advanced cases may need surgery.",
        infographic: Some(Infographic::GumDisease),
    },
    Article {
        id: 3,
        title: "Early Detection and Prevention of Oral Cancer",
        level: ArticleLevel::Beginner,
        read_time_minutes: 7,
        body: "Oral cancer can affect any part of the mouth and surrounding tissues. It is highly treatable when detected early, which makes self-examination and professional screening essential.\n\n\
### How to Perform a Monthly Self-Exam\n\n\
With a bright light and a mirror, check your face and neck for one-sided lumps, then your lips, cheeks, the roof of your mouth, every surface of your tongue and the floor of your mouth.\n\n\
### Signs and Symptoms to Watch For\n\n\
See a dentist or doctor if any of these last longer than two weeks: a sore that does not heal, red or white patches, numbness, a lump or thickening, or difficulty chewing or swallowing.\n\n\
### Major Risk Factors\n\n\
Tobacco in any form is the largest risk factor. Heavy alcohol use, HPV, sun exposure on the lips and a poor diet add to it.\n\n\
### The Role of Your Dentist\n\n\
A routine check-up includes an oral cancer screening. Your dentist will refer you for a biopsy if anything looks suspicious.",
        infographic: None,
    },
    Article {
        id: 4,
        title: "Oral Health Tips for the Whole Family",
        level: ArticleLevel::Beginner,
        read_time_minutes: 6,
        body: "Healthy habits start from birth, and every stage of life brings its own dental needs.\n\n\
### Infants (0-1 Year)\n\n\
Wipe your baby's gums after feeding. Once the first tooth appears, brush with a rice-grain smear of fluoride toothpaste and book a first dental visit by the first birthday.\n\n\
### Children (1-12 Years)\n\n\
Use a pea-sized amount of toothpaste from around age three and supervise brushing. Limit sugary snacks, ask about sealants for the back teeth and use a mouthguard for sport.\n\n\
### Teenagers (13-18 Years)\n\n\
Braces need extra cleaning care and wisdom teeth should be monitored. Talk about the risks of sugary drinks, tobacco, vaping and oral piercings.\n\n\
### Adults and Older Adults\n\n\
Keep up brushing and flossing. Dry mouth from medication and gum recession raise the risk of decay, and dentures or implants need their own cleaning routine.",
        infographic: None,
    },
    Article {
        id: 5,
        title: "Preventing Cavities and Tooth Decay",
        level: ArticleLevel::Beginner,
        read_time_minutes: 5,
        body: "Tooth decay is one of the most common chronic diseases worldwide, yet it is almost entirely preventable.\n\n\
### How a Cavity Develops\n\n\
Bacteria feed on sugars and starches and produce acids that strip minerals from the enamel. Saliva helps the enamel repair itself, but when acid attacks outpace repair a cavity forms.\n\n\
### The Power of Fluoride\n\n\
Fluoride makes enamel more resistant to acid and speeds up the repair of early decay. Fluoride toothpaste and fluoridated tap water both help.\n\n\
### The Role of Diet\n\n\
How often you eat sugar matters as much as how much. Limit snacking and sugary drinks between meals and drink water afterwards.\n\n\
### Sealants and Check-ups\n\n\
Sealants protect the deep grooves of the back teeth, and regular check-ups catch decay while it is still small.",
        infographic: None,
    },
];

pub fn articles() -> &'static [Article] {
    &ARTICLES
}

pub fn article(id: u32) -> Option<&'static Article> {
    ARTICLES.iter().find(|a| a.id == id)
}

/// One rendered piece of an article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleBlock<'a> {
    Heading(&'a str),
    Paragraph(&'a str),
    Infographic(Infographic),
}

/// Split an article body into display blocks. Paragraphs are separated by
/// blank lines; `### ` starts a heading. The infographic, if any, follows
/// the opening paragraph.
pub fn blocks(article: &Article) -> Vec<ArticleBlock<'_>> {
    let mut out = Vec::new();
    for (i, part) in article.body.split("\n\n").enumerate() {
        match part.strip_prefix("### ") {
            Some(heading) => out.push(ArticleBlock::Heading(heading)),
            None => out.push(ArticleBlock::Paragraph(part)),
        }
        if i == 0 {
            if let Some(graphic) = article.infographic {
                out.push(ArticleBlock::Infographic(graphic));
            }
        }
    }
    out
}

// ═══════════════════════════════════════════
// Saved articles
// ═══════════════════════════════════════════

pub const PROFILE_PREVIEW_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePreview {
    pub articles: Vec<&'static Article>,
    /// Opens Learn on the saved tab via `request_saved_tab`.
    pub show_view_all: bool,
}

pub struct SavedArticles {
    store: SharedStore,
    ids: Vec<u32>,
}

impl SavedArticles {
    /// Load the saved id list. A value that fails to parse is removed.
    pub fn load(store: SharedStore) -> Self {
        let ids = match store::read_value(store.as_ref(), keys::SAVED_ARTICLES) {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<u32>>(&raw) {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding unreadable saved-article list");
                    store::remove_value(store.as_ref(), keys::SAVED_ARTICLES);
                    Vec::new()
                }
            },
        };
        Self { store, ids }
    }

    /// Saved ids in the order they were saved.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn is_saved(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Save or unsave. Returns whether the article is saved afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_saved = match self.ids.iter().position(|&s| s == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };
        tracing::debug!(article_id = id, saved = now_saved, "Toggled saved article");
        store::save_json(self.store.as_ref(), keys::SAVED_ARTICLES, &self.ids);
        now_saved
    }

    /// Saved articles in catalogue order. Unknown ids are skipped.
    pub fn saved_articles(&self) -> Vec<&'static Article> {
        ARTICLES.iter().filter(|a| self.is_saved(a.id)).collect()
    }

    /// The profile card: the first `limit` saved articles in catalogue
    /// order. "View all" appears whenever anything is saved.
    pub fn profile_preview(&self, limit: usize) -> ProfilePreview {
        let saved = self.saved_articles();
        ProfilePreview {
            show_view_all: !saved.is_empty(),
            articles: saved.into_iter().take(limit).collect(),
        }
    }

    /// Articles listed under a tab.
    pub fn visible(&self, tab: LearnTab) -> Vec<&'static Article> {
        match tab {
            LearnTab::All => ARTICLES.iter().collect(),
            LearnTab::Saved => self.saved_articles(),
        }
    }
}

// ═══════════════════════════════════════════
// Initial tab hand-off
// ═══════════════════════════════════════════

/// Ask the next Learn page visit to open on the saved tab.
pub fn request_saved_tab(store: &SharedStore) {
    store::write_value(store.as_ref(), keys::INITIAL_LEARN_VIEW, LearnTab::Saved.as_str());
}

/// Tab to open on. Consumes any pending request.
pub fn take_initial_tab(store: &SharedStore) -> LearnTab {
    match store::take_value(store.as_ref(), keys::INITIAL_LEARN_VIEW).as_deref() {
        Some("saved") => LearnTab::Saved,
        _ => LearnTab::All,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::{KeyValueStore, MemoryStore};

    fn shared() -> (Arc<MemoryStore>, SharedStore) {
        let mem = Arc::new(MemoryStore::new());
        let store: SharedStore = mem.clone();
        (mem, store)
    }

    #[test]
    fn catalogue_has_unique_ids() {
        let mut ids: Vec<u32> = articles().iter().map(|a| a.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(article(2).unwrap().level, ArticleLevel::Intermediate);
        assert!(article(99).is_none());
    }

    #[test]
    fn blocks_place_infographic_after_first_paragraph() {
        let blocks = blocks(article(1).unwrap());
        assert!(matches!(blocks[0], ArticleBlock::Paragraph(_)));
        assert_eq!(blocks[1], ArticleBlock::Infographic(Infographic::DailyRoutine));
        assert_eq!(blocks[2], ArticleBlock::Heading("The Art of Brushing"));
    }

    #[test]
    fn blocks_without_infographic() {
        let blocks = blocks(article(3).unwrap());
        assert!(!blocks.iter().any(|b| matches!(b, ArticleBlock::Infographic(_))));
        assert!(blocks.contains(&ArticleBlock::Heading("Major Risk Factors")));
    }

    // ───────────────────────────────────────
    // saved list
    // ───────────────────────────────────────

    #[test]
    fn toggle_saves_then_unsaves() {
        let (mem, store) = shared();
        let mut saved = SavedArticles::load(store.clone());

        assert!(saved.toggle(3));
        assert!(saved.toggle(1));
        assert_eq!(saved.ids(), &[3, 1]);
        assert_eq!(mem.get(keys::SAVED_ARTICLES).unwrap().as_deref(), Some("[3,1]"));

        assert!(!saved.toggle(3));
        assert_eq!(saved.ids(), &[1]);
        assert!(!saved.is_saved(3));
    }

    #[test]
    fn saved_list_survives_reload() {
        let (_, store) = shared();
        let mut saved = SavedArticles::load(store.clone());
        saved.toggle(5);
        saved.toggle(2);

        let reloaded = SavedArticles::load(store);
        assert_eq!(reloaded.ids(), &[5, 2]);
        let titles: Vec<_> = reloaded.saved_articles().iter().map(|a| a.id).collect();
        assert_eq!(titles, vec![2, 5]);
    }

    #[test]
    fn unreadable_list_is_removed() {
        let (mem, store) = shared();
        mem.set(keys::SAVED_ARTICLES, "not json").unwrap();

        let saved = SavedArticles::load(store);
        assert_eq!(saved.count(), 0);
        assert!(mem.get(keys::SAVED_ARTICLES).unwrap().is_none());
    }

    #[test]
    fn visible_by_tab() {
        let (_, store) = shared();
        let mut saved = SavedArticles::load(store);
        assert_eq!(saved.visible(LearnTab::All).len(), 5);
        assert!(saved.visible(LearnTab::Saved).is_empty());
        saved.toggle(4);
        assert_eq!(saved.visible(LearnTab::Saved)[0].id, 4);
    }

    #[test]
    fn storage_failure_keeps_toggle_in_memory() {
        let (mem, store) = shared();
        let mut saved = SavedArticles::load(store);
        mem.set_failing(true);
        assert!(saved.toggle(2));
        assert!(saved.is_saved(2));
    }

    // ───────────────────────────────────────
    // initial tab
    // ───────────────────────────────────────

    #[test]
    fn profile_preview_takes_first_saved_in_catalogue_order() {
        let (_, store) = shared();
        let mut saved = SavedArticles::load(store.clone());
        assert_eq!(
            saved.profile_preview(PROFILE_PREVIEW_LEN),
            ProfilePreview {
                articles: Vec::new(),
                show_view_all: false,
            }
        );

        for id in [5, 2, 4, 1] {
            saved.toggle(id);
        }
        let preview = saved.profile_preview(PROFILE_PREVIEW_LEN);
        let ids: Vec<u32> = preview.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 4]);
        assert!(preview.show_view_all);

        request_saved_tab(&store);
        assert_eq!(take_initial_tab(&store), LearnTab::Saved);
    }

    #[test]
    fn saved_tab_request_is_consumed_once() {
        let (mem, store) = shared();
        assert_eq!(take_initial_tab(&store), LearnTab::All);

        request_saved_tab(&store);
        assert_eq!(take_initial_tab(&store), LearnTab::Saved);
        assert!(mem.get(keys::INITIAL_LEARN_VIEW).unwrap().is_none());
        assert_eq!(take_initial_tab(&store), LearnTab::All);
    }
}

//! Persisted key names. Kept identical to the web build so an exported
//! browser profile can be imported as-is.

/// Cached assistant avatar image (a `data:` URL).
pub const ASSISTANT_AVATAR: &str = "aiAssistantAvatar";
/// JSON list of saved article ids, in save order.
pub const SAVED_ARTICLES: &str = "savedArticles";
/// JSON list of symptom logs.
pub const SYMPTOM_LOGS: &str = "symptomLogs";
/// JSON list of community posts with nested replies.
pub const COMMUNITY_POSTS: &str = "communityPosts";
/// `"true"` once the first-run disclaimer was acknowledged.
pub const SEEN_DISCLAIMER: &str = "hasSeenWelcomeMessage";
/// Transient: open the learn page on the saved tab. Consumed on read.
pub const INITIAL_LEARN_VIEW: &str = "initialLearnView";

//! Assistant avatar bootstrap.
//!
//! Runs once at startup before the UI is interactive. The image is
//! generated only when no avatar is cached; once stored, later starts skip
//! the remote call entirely.

use crate::assistant::ImageModel;
use crate::store::{self, keys, KeyValueStore};

pub const AVATAR_PROMPT: &str = "A modern, friendly AI assistant avatar for a dental health app. \
Stylized tooth logo subtly integrated with a sound wave or a gentle smile curve. Use a clean, \
minimalist design with a soft color palette of teal (#14b8a6), light blue (#38bdf8), and white. \
Smooth gradients. Flat 2D vector style. Centered in a circle.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarBootstrap {
    /// An avatar was already stored; nothing was requested.
    Cached,
    /// A new avatar was generated and handed to the store.
    Generated,
    /// Generation failed. The app continues with the placeholder icon and
    /// tries again on the next start.
    Failed,
}

/// Make sure an assistant avatar is cached, generating it at most once.
pub fn ensure_assistant_avatar(store: &dyn KeyValueStore, model: &dyn ImageModel) -> AvatarBootstrap {
    let cached = store::read_value(store, keys::ASSISTANT_AVATAR);
    if cached.is_some_and(|a| !a.is_empty()) {
        tracing::debug!("Assistant avatar already cached");
        return AvatarBootstrap::Cached;
    }

    tracing::info!("No assistant avatar found, generating one");
    match model.generate_image(AVATAR_PROMPT) {
        Ok(image) => {
            if !store::write_value(store, keys::ASSISTANT_AVATAR, &image) {
                tracing::warn!("Generated avatar could not be cached; it will be regenerated next start");
            }
            AvatarBootstrap::Generated
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate assistant avatar");
            AvatarBootstrap::Failed
        }
    }
}

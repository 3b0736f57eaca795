use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Oral Health SA";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gemini REST endpoint and model defaults
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Get the application data directory.
/// Platform data dir (e.g. ~/.local/share/OralHealthSA), or the working
/// directory when the platform reports none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("OralHealthSA")
}

/// Local key/value database
pub fn store_path() -> PathBuf {
    app_data_dir().join("store.db")
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,oral_health_lib=debug"
    } else {
        "warn,oral_health_lib=info"
    }
}

/// Remote assistant settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// `None` disables the remote assistant.
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub image_model: String,
    /// Request timeout. `None` lets a chat turn wait for as long as it takes.
    pub timeout_secs: Option<u64>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

impl AssistantConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset and an
    /// unparsable timeout is ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs = get("ORAL_HEALTH_TIMEOUT_SECS").and_then(|raw| match raw.trim().parse() {
            Ok(secs) => Some(secs),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid ORAL_HEALTH_TIMEOUT_SECS");
                None
            }
        });

        Self {
            api_key: get("GEMINI_API_KEY"),
            base_url: get("ORAL_HEALTH_GEMINI_URL").unwrap_or(defaults.base_url),
            chat_model: get("ORAL_HEALTH_CHAT_MODEL").unwrap_or(defaults.chat_model),
            image_model: get("ORAL_HEALTH_IMAGE_MODEL").unwrap_or(defaults.image_model),
            timeout_secs,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

//! Educational chat assistant and avatar image generation.
//!
//! The remote model sits behind `ChatModel` / `ImageModel` so conversations
//! and the avatar bootstrap can be driven by mocks in tests.

pub mod conversation;
pub mod gemini;
pub mod safety;

pub use conversation::{dispatch, ChatSession, Conversation, PendingTurn, TurnOutcome, TurnReply};
pub use gemini::GeminiClient;

use thiserror::Error;

use crate::models::ChatMessage;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("The assistant is not configured (set GEMINI_API_KEY)")]
    NotConfigured,

    #[error("Cannot reach the assistant service at {0}")]
    Connection(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Assistant service returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Could not read the assistant response: {0}")]
    ResponseParsing(String),

    #[error("The assistant returned an empty response")]
    EmptyResponse,

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Still waiting for the previous answer")]
    TurnInFlight,

    #[error("Background task failed: {0}")]
    Task(String),
}

/// One chat round trip. `history` holds the earlier exchanged turns of the
/// session, oldest first; `message` is the new user turn.
pub trait ChatModel: Send + Sync {
    fn send(&self, system: &str, history: &[ChatMessage], message: &str) -> Result<String, AssistantError>;
}

/// One-shot image generation. Returns an embeddable image reference.
pub trait ImageModel: Send + Sync {
    fn generate_image(&self, prompt: &str) -> Result<String, AssistantError>;
}

pub const SYSTEM_INSTRUCTION: &str = "You are a friendly and knowledgeable AI Oral Health \
Assistant for people in South Africa. Provide clear, accurate and easy-to-understand \
educational information about oral hygiene, common dental conditions and prevention. Where \
helpful, mention public dental services available in South Africa. You must not diagnose any \
condition and must not prescribe or recommend specific treatments or medication doses. If a \
user describes symptoms, explain possible general causes for education only and always advise \
them to see a qualified dentist or visit a public clinic. Keep answers concise and supportive.";

pub const GREETING: &str =
    "Hello! I'm your AI Oral Health Assistant for South Africa. How can I help you today?";

/// Suggested first questions for an empty conversation.
pub const QUICK_PROMPTS: &[&str] = &[
    "How often should I brush my teeth?",
    "What are the symptoms of gum disease?",
    "How can I prevent cavities?",
];

/// Model-turn text shown in place of an answer when a request fails.
pub fn error_reply(error: &AssistantError) -> String {
    format!("Sorry, something went wrong. {error}")
}

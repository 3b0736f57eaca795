//! Chat conversation lifecycle.
//!
//! A `Conversation` owns the visible message log and the current model
//! session. Every outgoing turn carries the id of the session it was issued
//! for; a reply whose session no longer matches (the user started a new
//! conversation meanwhile) is dropped without touching the log.

use std::sync::Arc;

use uuid::Uuid;

use super::{error_reply, safety, AssistantError, ChatModel, GREETING, SYSTEM_INSTRUCTION};
use crate::models::ChatMessage;

/// Model-side session: the turns actually exchanged with the model.
/// The greeting and error messages are display-only and never sent.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

/// A user turn that has been recorded and still awaits the model.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    pub session_id: Uuid,
    pub history: Vec<ChatMessage>,
    pub message: String,
}

impl PendingTurn {
    /// Run the round trip. Blocking.
    pub fn run(self, model: &dyn ChatModel) -> TurnReply {
        let result = model.send(SYSTEM_INSTRUCTION, &self.history, &self.message);
        TurnReply {
            session_id: self.session_id,
            message: self.message,
            result,
        }
    }
}

/// The model's answer (or failure) for a `PendingTurn`.
#[derive(Debug)]
pub struct TurnReply {
    pub session_id: Uuid,
    pub message: String,
    pub result: Result<String, AssistantError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Answered,
    /// The request failed; an apology turn was shown instead.
    Failed(String),
    /// Reply belonged to a discarded session and was ignored.
    Stale,
}

pub struct Conversation {
    session: ChatSession,
    messages: Vec<ChatMessage>,
    awaiting_reply: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(),
            messages: vec![ChatMessage::model(GREETING)],
            awaiting_reply: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    /// Visible log, greeting first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a turn is in flight; the send control stays disabled.
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// Start a new conversation. Any reply still in flight becomes stale.
    pub fn reset(&mut self) {
        let old = self.session.id();
        *self = Self::new();
        tracing::info!(old_session = %old, new_session = %self.session.id(), "Conversation reset");
    }

    /// Record the user turn and hand back the request to send.
    pub fn begin_turn(&mut self, text: &str) -> Result<PendingTurn, AssistantError> {
        if text.trim().is_empty() {
            return Err(AssistantError::EmptyMessage);
        }
        if self.awaiting_reply {
            return Err(AssistantError::TurnInFlight);
        }

        self.messages.push(ChatMessage::user(text));
        self.awaiting_reply = true;
        Ok(PendingTurn {
            session_id: self.session.id(),
            history: self.session.history.clone(),
            message: text.to_string(),
        })
    }

    /// Apply a reply to the log if it belongs to the current session.
    pub fn complete_turn(&mut self, reply: TurnReply) -> TurnOutcome {
        if reply.session_id != self.session.id() {
            tracing::debug!(
                reply_session = %reply.session_id,
                current_session = %self.session.id(),
                "Discarding reply for a previous conversation"
            );
            return TurnOutcome::Stale;
        }
        self.awaiting_reply = false;

        match reply.result {
            Ok(answer) => {
                self.session.history.push(ChatMessage::user(&reply.message));
                self.session.history.push(ChatMessage::model(&answer));
                self.messages.push(ChatMessage::model(&safety::with_reminder(&answer)));
                TurnOutcome::Answered
            }
            Err(e) => {
                tracing::warn!(session = %reply.session_id, error = %e, "Chat turn failed");
                let text = error_reply(&e);
                self.messages.push(ChatMessage::model(&text));
                TurnOutcome::Failed(text)
            }
        }
    }

    /// Begin, run and complete a turn on the calling thread.
    pub fn send(&mut self, model: &dyn ChatModel, text: &str) -> Result<TurnOutcome, AssistantError> {
        let pending = self.begin_turn(text)?;
        let reply = pending.run(model);
        Ok(self.complete_turn(reply))
    }
}

/// Run a pending turn on the blocking pool. The reply is returned to the
/// caller, who applies it with `Conversation::complete_turn`.
pub async fn dispatch(model: Arc<dyn ChatModel>, turn: PendingTurn) -> TurnReply {
    let session_id = turn.session_id;
    let message = turn.message.clone();

    match tokio::task::spawn_blocking(move || turn.run(model.as_ref())).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!(session = %session_id, error = %e, "Chat worker task failed");
            TurnReply {
                session_id,
                message,
                result: Err(AssistantError::Task(e.to_string())),
            }
        }
    }
}

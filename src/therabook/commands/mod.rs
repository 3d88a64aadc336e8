use crate::model::AppointmentEvent;
use std::path::PathBuf;

pub mod create;
pub mod delete;
pub mod duplicate;
pub mod export;
pub mod list;
pub mod reschedule;
pub mod status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Semantic flavor of a confirmation request, so the UI can style the
/// dialog without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmKind {
    Info,
    Success,
    Destructive,
}

/// A request for user confirmation, handed to a continuation supplied by
/// the caller. Returning false leaves the collection untouched.
#[derive(Debug, Clone)]
pub struct ConfirmRequest {
    pub kind: ConfirmKind,
    pub title: String,
    pub message: String,
}

impl ConfirmRequest {
    pub fn new(kind: ConfirmKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Events created or mutated by the operation.
    pub affected_events: Vec<AppointmentEvent>,
    /// Events produced by a read (list/filter) operation, source order.
    pub listed_events: Vec<AppointmentEvent>,
    /// File written by an export operation.
    pub exported_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_events(mut self, events: Vec<AppointmentEvent>) -> Self {
        self.affected_events = events;
        self
    }

    pub fn with_listed_events(mut self, events: Vec<AppointmentEvent>) -> Self {
        self.listed_events = events;
        self
    }

    /// The declined-confirmation result shared by all confirmed operations.
    pub(crate) fn cancelled() -> Self {
        let mut res = Self::default();
        res.add_message(CmdMessage::info("Operation cancelled."));
        res
    }
}

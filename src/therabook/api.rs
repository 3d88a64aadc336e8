//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! write surface for the event collection. It dispatches to the appropriate
//! command function and returns structured `Result<CmdResult>` values; it
//! contains no business logic, no I/O and no presentation concerns.
//!
//! Lifecycle actions arrive as an [`EventAction`], a tagged variant per
//! operation carrying exactly the payload it needs. [`ScheduleApi::apply`]
//! matches it exhaustively, so adding an action is a compile error until
//! every dispatcher handles it.
//!
//! Operations that require confirmation take a continuation
//! (`FnOnce(&ConfirmRequest) -> bool`). The facade never asks the user
//! anything itself; the UI decides how a [`ConfirmRequest`] is presented.
//!
//! `ScheduleApi<S: EventStore>` is generic over the storage backend, which
//! keeps the whole surface testable against `InMemoryStore`.

use crate::commands::{self, create::AppointmentForm, CmdResult, ConfirmRequest};
use crate::error::Result;
use crate::filter::EventFilter;
use crate::store::EventStore;
use chrono::{DateTime, Utc};
use std::path::Path;
use uuid::Uuid;

/// A lifecycle action addressed to one event by id.
#[derive(Debug, Clone)]
pub enum EventAction {
    Reschedule {
        id: Uuid,
        new_start: DateTime<Utc>,
        new_end: Option<DateTime<Utc>>,
    },
    Duplicate(Uuid),
    Complete(Uuid),
    Cancel(Uuid),
    Delete(Uuid),
}

/// The main API facade for scheduling operations.
pub struct ScheduleApi<S: EventStore> {
    store: S,
}

impl<S: EventStore> ScheduleApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Schedule a new appointment from a form record.
    pub fn schedule(&mut self, form: AppointmentForm) -> Result<CmdResult> {
        commands::create::run(&mut self.store, form)
    }

    /// The filtered view of the collection.
    pub fn events(&self, filter: &EventFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    /// Export the filtered view as CSV into `dir`.
    pub fn export(&self, filter: &EventFilter, dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, filter, dir)
    }

    /// Apply a lifecycle action, asking `confirm` where the operation
    /// requires it.
    pub fn apply<F>(&mut self, action: EventAction, confirm: F) -> Result<CmdResult>
    where
        F: FnOnce(&ConfirmRequest) -> bool,
    {
        match action {
            EventAction::Reschedule {
                id,
                new_start,
                new_end,
            } => commands::reschedule::run(&mut self.store, id, new_start, new_end, confirm),
            EventAction::Duplicate(id) => commands::duplicate::run(&mut self.store, id),
            EventAction::Complete(id) => commands::status::complete(&mut self.store, id, confirm),
            EventAction::Cancel(id) => commands::status::cancel(&mut self.store, id, confirm),
            EventAction::Delete(id) => commands::delete::run(&mut self.store, id, confirm),
        }
    }
}

pub use crate::commands::{CmdMessage, ConfirmKind, MessageLevel};

//! # Storage Layer
//!
//! The [`EventStore`] trait abstracts ownership of the event collection so
//! the command layer stays decoupled from how the collection is held.
//!
//! The collection keeps insertion order: the calendar treats it as an
//! ordered sequence for rendering, and filtered views must preserve the
//! relative order of their source. `save_event` replaces an existing event
//! in place when the id already exists (copy-on-write by value), so a
//! reschedule or status change never moves an event within the sequence.
//!
//! Persistence to a real backing store is out of scope; the only
//! implementation is [`memory::InMemoryStore`], seeded from the static mock
//! calendar in [`crate::seed`] at startup.

use crate::error::Result;
use crate::model::AppointmentEvent;
use uuid::Uuid;

pub mod memory;

/// Abstract interface over the event collection.
pub trait EventStore {
    /// Insert a new event, or replace the event with the same id.
    fn save_event(&mut self, event: &AppointmentEvent) -> Result<()>;

    /// Look up an event by id. Missing ids are not an error: the facade
    /// treats mutations against vanished ids as silent no-ops.
    fn find_event(&self, id: &Uuid) -> Result<Option<AppointmentEvent>>;

    /// All events in insertion order.
    fn list_events(&self) -> Result<Vec<AppointmentEvent>>;

    /// Remove an event. Returns false when the id was not present.
    fn remove_event(&mut self, id: &Uuid) -> Result<bool>;
}

use super::EventStore;
use crate::error::Result;
use crate::model::AppointmentEvent;
use uuid::Uuid;

/// In-memory event collection.
///
/// Backed by a `Vec` so insertion order survives; replacing an event keeps
/// its position in the sequence.
#[derive(Default)]
pub struct InMemoryStore {
    events: Vec<AppointmentEvent>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with the static mock calendar.
    pub fn seeded() -> Self {
        Self {
            events: crate::seed::seed_events(),
        }
    }
}

impl EventStore for InMemoryStore {
    fn save_event(&mut self, event: &AppointmentEvent) -> Result<()> {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event.clone(),
            None => self.events.push(event.clone()),
        }
        Ok(())
    }

    fn find_event(&self, id: &Uuid) -> Result<Option<AppointmentEvent>> {
        Ok(self.events.iter().find(|e| e.id == *id).cloned())
    }

    fn list_events(&self) -> Result<Vec<AppointmentEvent>> {
        Ok(self.events.clone())
    }

    fn remove_event(&mut self, id: &Uuid) -> Result<bool> {
        let before = self.events.len();
        self.events.retain(|e| e.id != *id);
        Ok(self.events.len() < before)
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AppointmentStatus, ClientRef, SessionFormat, SessionType};
    use chrono::{DateTime, Duration, Utc};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn seeded() -> Self {
            Self {
                store: InMemoryStore::seeded(),
            }
        }

        pub fn with_event(mut self, event: AppointmentEvent) -> Self {
            self.store.save_event(&event).unwrap();
            self
        }

        pub fn with_appointment(
            self,
            name: &str,
            session_type: SessionType,
            status: AppointmentStatus,
            start: DateTime<Utc>,
        ) -> Self {
            let event = AppointmentEvent {
                id: uuid::Uuid::new_v4(),
                title: format!("{} - Session", name),
                start,
                end: start + Duration::minutes(60),
                client: ClientRef {
                    key: name.to_lowercase().replace(' ', "-"),
                    name: name.to_string(),
                    email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
                },
                session_type,
                format: SessionFormat::InPerson,
                status,
                duration_minutes: 60,
                session_number: 1,
                diagnosis: String::new(),
                notes: None,
                rate: 120.0,
            };
            self.with_event(event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{AppointmentStatus, SessionType};
    use chrono::{Duration, Utc};

    #[test]
    fn save_replaces_in_place() {
        let start = Utc::now() + Duration::days(1);
        let fixture = StoreFixture::new()
            .with_appointment("A", SessionType::Individual, AppointmentStatus::Confirmed, start)
            .with_appointment("B", SessionType::Couples, AppointmentStatus::Confirmed, start)
            .with_appointment("C", SessionType::Family, AppointmentStatus::Confirmed, start);
        let mut store = fixture.store;

        let mut second = store.list_events().unwrap()[1].clone();
        second.status = AppointmentStatus::Cancelled;
        store.save_event(&second).unwrap();

        let events = store.list_events().unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].client.name, "B");
        assert_eq!(events[1].status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn remove_reports_misses() {
        let mut store = InMemoryStore::new();
        assert!(!store.remove_event(&Uuid::new_v4()).unwrap());
    }

    #[test]
    fn seeded_store_is_not_empty() {
        let store = InMemoryStore::seeded();
        assert!(!store.list_events().unwrap().is_empty());
    }
}

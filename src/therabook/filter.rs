//! Predicate composition over the event collection.
//!
//! A filter holds one optional predicate per dimension; `None` is the
//! wildcard. All present predicates must match (logical AND). Filtering is
//! pure and preserves the relative order of the source collection, so it is
//! safe to recompute on every render.

use crate::model::{AppointmentEvent, AppointmentStatus, SessionFormat, SessionType};

#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub session_type: Option<SessionType>,
    pub format: Option<SessionFormat>,
    pub status: Option<AppointmentStatus>,
    /// Case-insensitive substring match against the client display name.
    pub client: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &AppointmentEvent) -> bool {
        if let Some(t) = self.session_type {
            if event.session_type != t {
                return false;
            }
        }
        if let Some(f) = self.format {
            if event.format != f {
                return false;
            }
        }
        if let Some(s) = self.status {
            if event.status != s {
                return false;
            }
        }
        if let Some(term) = &self.client {
            if !event
                .client
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Stable filter: keeps matching events in their original relative order.
pub fn filter_events(events: Vec<AppointmentEvent>, filter: &EventFilter) -> Vec<AppointmentEvent> {
    events.into_iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClientRef;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn event(name: &str, session_type: SessionType, status: AppointmentStatus) -> AppointmentEvent {
        let start = Utc::now() + Duration::days(1);
        AppointmentEvent {
            id: Uuid::new_v4(),
            title: format!("{} - Session", name),
            start,
            end: start + Duration::minutes(60),
            client: ClientRef {
                key: name.to_lowercase(),
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
            },
            session_type,
            format: SessionFormat::InPerson,
            status,
            duration_minutes: 60,
            session_number: 1,
            diagnosis: String::new(),
            notes: None,
            rate: 120.0,
        }
    }

    #[test]
    fn wildcard_filter_matches_everything() {
        let events = vec![
            event("Emma", SessionType::Individual, AppointmentStatus::Confirmed),
            event("Chen", SessionType::Couples, AppointmentStatus::Pending),
        ];
        let result = filter_events(events.clone(), &EventFilter::default());
        assert_eq!(result, events);
    }

    #[test]
    fn session_type_filter_preserves_order() {
        let events = vec![
            event("A", SessionType::Couples, AppointmentStatus::Confirmed),
            event("B", SessionType::Individual, AppointmentStatus::Confirmed),
            event("C", SessionType::Couples, AppointmentStatus::Confirmed),
            event("D", SessionType::Family, AppointmentStatus::Confirmed),
            event("E", SessionType::Couples, AppointmentStatus::Pending),
            event("F", SessionType::Group, AppointmentStatus::Confirmed),
        ];
        let filter = EventFilter {
            session_type: Some(SessionType::Couples),
            ..Default::default()
        };
        let result = filter_events(events, &filter);
        let names: Vec<&str> = result.iter().map(|e| e.client.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "E"]);
    }

    #[test]
    fn predicates_combine_with_and() {
        let events = vec![
            event("Emma", SessionType::Individual, AppointmentStatus::Confirmed),
            event("Emma", SessionType::Individual, AppointmentStatus::Cancelled),
            event("Chen", SessionType::Individual, AppointmentStatus::Confirmed),
        ];
        let filter = EventFilter {
            session_type: Some(SessionType::Individual),
            status: Some(AppointmentStatus::Confirmed),
            client: Some("emma".into()),
            ..Default::default()
        };
        let result = filter_events(events, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].client.name, "Emma");
        assert_eq!(result[0].status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn client_substring_is_case_insensitive() {
        let events = vec![
            event(
                "Emma Thompson",
                SessionType::Individual,
                AppointmentStatus::Confirmed,
            ),
            event("Chen", SessionType::Couples, AppointmentStatus::Confirmed),
        ];
        let filter = EventFilter {
            client: Some("THOMP".into()),
            ..Default::default()
        };
        let result = filter_events(events, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].client.name, "Emma Thompson");
    }

    #[test]
    fn empty_substring_matches_all() {
        let events = vec![
            event("Emma", SessionType::Individual, AppointmentStatus::Confirmed),
            event("Chen", SessionType::Couples, AppointmentStatus::Confirmed),
        ];
        let filter = EventFilter {
            client: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_events(events, &filter).len(), 2);
    }
}

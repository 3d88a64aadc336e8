//! Static token resolution tables.
//!
//! The scheduling form hands the core short enumeration tokens (client key,
//! session type key, location key). These tables resolve them into display
//! names, contact details, default rates and delivery formats. They stand in
//! for the client roster a real deployment would load from records.

use crate::model::{SessionFormat, SessionType};
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
pub struct ClientEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub diagnosis: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionTypeEntry {
    pub key: &'static str,
    pub session_type: SessionType,
    /// Label used in event titles, e.g. "Individual Therapy".
    pub label: &'static str,
    pub rate: f64,
    pub default_duration: i64,
}

const CLIENT_ROSTER: &[ClientEntry] = &[
    ClientEntry {
        key: "emma",
        name: "Emma Thompson",
        email: "emma.t@example.com",
        diagnosis: "Generalized Anxiety Disorder",
    },
    ClientEntry {
        key: "michael",
        name: "Michael & Dana Chen",
        email: "m.chen@example.com",
        diagnosis: "Relationship distress",
    },
    ClientEntry {
        key: "sarah",
        name: "Sarah Williams",
        email: "sarah.w@example.com",
        diagnosis: "Major Depressive Disorder",
    },
    ClientEntry {
        key: "rodriguez",
        name: "Rodriguez Family",
        email: "j.rodriguez@example.com",
        diagnosis: "Family conflict",
    },
    ClientEntry {
        key: "lisa",
        name: "Lisa Park",
        email: "lisa.park@example.com",
        diagnosis: "Adjustment disorder",
    },
    ClientEntry {
        key: "mindfulness",
        name: "Mindfulness Group",
        email: "groups@example.com",
        diagnosis: "Stress management",
    },
];

const SESSION_TYPES: &[SessionTypeEntry] = &[
    SessionTypeEntry {
        key: "individual",
        session_type: SessionType::Individual,
        label: "Individual Therapy",
        rate: 120.0,
        default_duration: 60,
    },
    SessionTypeEntry {
        key: "couples",
        session_type: SessionType::Couples,
        label: "Couples Therapy",
        rate: 150.0,
        default_duration: 90,
    },
    SessionTypeEntry {
        key: "family",
        session_type: SessionType::Family,
        label: "Family Therapy",
        rate: 160.0,
        default_duration: 90,
    },
    SessionTypeEntry {
        key: "group",
        session_type: SessionType::Group,
        label: "Group Therapy",
        rate: 45.0,
        default_duration: 60,
    },
];

static CLIENTS_BY_KEY: Lazy<HashMap<&'static str, &'static ClientEntry>> =
    Lazy::new(|| CLIENT_ROSTER.iter().map(|c| (c.key, c)).collect());

static SESSION_TYPES_BY_KEY: Lazy<HashMap<&'static str, &'static SessionTypeEntry>> =
    Lazy::new(|| SESSION_TYPES.iter().map(|t| (t.key, t)).collect());

pub fn client(key: &str) -> Option<&'static ClientEntry> {
    CLIENTS_BY_KEY.get(key).copied()
}

pub fn session_type(key: &str) -> Option<&'static SessionTypeEntry> {
    SESSION_TYPES_BY_KEY.get(key).copied()
}

pub fn location(key: &str) -> Option<SessionFormat> {
    match key {
        "office" => Some(SessionFormat::InPerson),
        "video" => Some(SessionFormat::Telehealth),
        "phone" => Some(SessionFormat::Phone),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_client() {
        let emma = client("emma").unwrap();
        assert_eq!(emma.name, "Emma Thompson");
        assert!(client("nobody").is_none());
    }

    #[test]
    fn resolves_session_type_with_rate() {
        let couples = session_type("couples").unwrap();
        assert_eq!(couples.session_type, SessionType::Couples);
        assert_eq!(couples.rate, 150.0);
        assert_eq!(couples.default_duration, 90);
    }

    #[test]
    fn resolves_locations() {
        assert_eq!(location("office"), Some(SessionFormat::InPerson));
        assert_eq!(location("video"), Some(SessionFormat::Telehealth));
        assert_eq!(location("phone"), Some(SessionFormat::Phone));
        assert_eq!(location("moon"), None);
    }
}

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Session modality, a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    Individual,
    Couples,
    Family,
    Group,
}

impl SessionType {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().trim() {
            "individual" => Ok(SessionType::Individual),
            "couples" => Ok(SessionType::Couples),
            "family" => Ok(SessionType::Family),
            "group" => Ok(SessionType::Group),
            _ => Err(format!(
                "Invalid session type: '{}'. Must be one of: individual, couples, family, group",
                value
            )),
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionType::Individual => write!(f, "Individual"),
            SessionType::Couples => write!(f, "Couples"),
            SessionType::Family => write!(f, "Family"),
            SessionType::Group => write!(f, "Group"),
        }
    }
}

/// How the session is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionFormat {
    InPerson,
    Telehealth,
    Phone,
}

impl SessionFormat {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().trim() {
            "in-person" | "in_person" => Ok(SessionFormat::InPerson),
            "telehealth" => Ok(SessionFormat::Telehealth),
            "phone" => Ok(SessionFormat::Phone),
            _ => Err(format!(
                "Invalid format: '{}'. Must be one of: in-person, telehealth, phone",
                value
            )),
        }
    }
}

impl fmt::Display for SessionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionFormat::InPerson => write!(f, "In-Person"),
            SessionFormat::Telehealth => write!(f, "Telehealth"),
            SessionFormat::Phone => write!(f, "Phone"),
        }
    }
}

/// The appointment status lifecycle.
///
/// `Confirmed` is the initial state for directly scheduled appointments,
/// `Pending` for duplicates. `Completed`, `Cancelled` and `NoShow` are
/// terminal: there is no transition back out of them, a new booking is a
/// fresh creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_lowercase().trim() {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "pending" => Ok(AppointmentStatus::Pending),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            "no-show" | "no_show" => Ok(AppointmentStatus::NoShow),
            _ => Err(format!(
                "Invalid status: '{}'. Must be one of: confirmed, pending, completed, cancelled, no-show",
                value
            )),
        }
    }

    /// Terminal states cannot be completed or cancelled again.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Completed | AppointmentStatus::Cancelled | AppointmentStatus::NoShow
        )
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "Confirmed"),
            AppointmentStatus::Pending => write!(f, "Pending"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::NoShow => write!(f, "No-Show"),
        }
    }
}

/// Denormalized client reference embedded in each event.
///
/// There is no persistence layer to join against, so the display name and
/// contact email are copied into the event at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    pub key: String,
    pub name: String,
    pub email: String,
}

/// One scheduled therapy session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentEvent {
    pub id: Uuid,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub client: ClientRef,
    pub session_type: SessionType,
    pub format: SessionFormat,
    pub status: AppointmentStatus,
    // Derivable from start/end but stored for display and billing.
    pub duration_minutes: i64,
    pub session_number: u32,
    pub diagnosis: String,
    pub notes: Option<String>,
    pub rate: f64,
}

impl AppointmentEvent {
    /// Build a new event from a start instant and a duration.
    ///
    /// The end instant is computed as `start + duration`. Durations are
    /// validated upstream; a non-positive value is clamped to one minute
    /// here so `end > start` holds by construction for every caller.
    #[allow(clippy::too_many_arguments)]
    pub fn schedule(
        title: String,
        start: DateTime<Utc>,
        duration_minutes: i64,
        client: ClientRef,
        session_type: SessionType,
        format: SessionFormat,
        session_number: u32,
        diagnosis: String,
        notes: Option<String>,
        rate: f64,
    ) -> Self {
        let duration_minutes = duration_minutes.max(1);
        Self {
            id: Uuid::new_v4(),
            title,
            start,
            end: start + Duration::minutes(duration_minutes),
            client,
            session_type,
            format,
            status: AppointmentStatus::Confirmed,
            duration_minutes,
            session_number,
            diagnosis,
            notes,
            rate,
        }
    }

    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_types_case_insensitively() {
        assert_eq!(SessionType::parse("Couples").unwrap(), SessionType::Couples);
        assert_eq!(
            SessionType::parse(" individual ").unwrap(),
            SessionType::Individual
        );
        assert!(SessionType::parse("solo").is_err());
    }

    #[test]
    fn parses_status_aliases() {
        assert_eq!(
            AppointmentStatus::parse("no-show").unwrap(),
            AppointmentStatus::NoShow
        );
        assert_eq!(
            AppointmentStatus::parse("no_show").unwrap(),
            AppointmentStatus::NoShow
        );
    }

    #[test]
    fn terminal_states() {
        assert!(AppointmentStatus::Completed.is_terminal());
        assert!(AppointmentStatus::Cancelled.is_terminal());
        assert!(AppointmentStatus::NoShow.is_terminal());
        assert!(!AppointmentStatus::Confirmed.is_terminal());
        assert!(!AppointmentStatus::Pending.is_terminal());
    }

    #[test]
    fn schedule_computes_end_after_start() {
        let start = Utc::now();
        let ev = AppointmentEvent::schedule(
            "Emma Thompson - Individual Therapy".into(),
            start,
            60,
            ClientRef {
                key: "emma".into(),
                name: "Emma Thompson".into(),
                email: "emma.t@example.com".into(),
            },
            SessionType::Individual,
            SessionFormat::InPerson,
            1,
            "Generalized Anxiety Disorder".into(),
            None,
            120.0,
        );
        assert!(ev.end > ev.start);
        assert_eq!(ev.end - ev.start, Duration::minutes(60));
        assert_eq!(ev.status, AppointmentStatus::Confirmed);
    }

    #[test]
    fn non_positive_duration_still_ends_after_start() {
        for minutes in [0, -30] {
            let start = Utc::now();
            let ev = AppointmentEvent::schedule(
                "Emma Thompson - Individual Therapy".into(),
                start,
                minutes,
                ClientRef {
                    key: "emma".into(),
                    name: "Emma Thompson".into(),
                    email: "emma.t@example.com".into(),
                },
                SessionType::Individual,
                SessionFormat::InPerson,
                1,
                "Generalized Anxiety Disorder".into(),
                None,
                120.0,
            );
            assert!(ev.end > ev.start);
            assert!(ev.duration_minutes > 0);
        }
    }
}

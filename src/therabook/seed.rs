//! The static mock calendar loaded at startup.
//!
//! Dates are anchored to "now" so the seeded week always straddles today:
//! one completed session in the recent past, the rest upcoming. Clients and
//! rates line up with the roster in [`crate::lookup`].

use crate::model::{
    AppointmentEvent, AppointmentStatus, ClientRef, SessionFormat, SessionType,
};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use uuid::Uuid;

fn at(days_from_today: i64, hour: u32, min: u32) -> DateTime<Utc> {
    let day = Utc::now().date_naive() + Duration::days(days_from_today);
    day.and_time(NaiveTime::from_hms_opt(hour, min, 0).expect("valid seed time"))
        .and_utc()
}

#[allow(clippy::too_many_arguments)]
fn event(
    client_key: &str,
    session_type_key: &str,
    format: SessionFormat,
    status: AppointmentStatus,
    start: DateTime<Utc>,
    duration_minutes: i64,
    session_number: u32,
    notes: Option<&str>,
) -> AppointmentEvent {
    let client = crate::lookup::client(client_key).expect("seed client in roster");
    let kind = crate::lookup::session_type(session_type_key).expect("seed session type");
    AppointmentEvent {
        id: Uuid::new_v4(),
        title: format!("{} - {}", client.name, kind.label),
        start,
        end: start + Duration::minutes(duration_minutes),
        client: ClientRef {
            key: client.key.to_string(),
            name: client.name.to_string(),
            email: client.email.to_string(),
        },
        session_type: kind.session_type,
        format,
        status,
        duration_minutes,
        session_number,
        diagnosis: client.diagnosis.to_string(),
        notes: notes.map(str::to_string),
        rate: kind.rate,
    }
}

pub fn seed_events() -> Vec<AppointmentEvent> {
    vec![
        event(
            "lisa",
            "individual",
            SessionFormat::Phone,
            AppointmentStatus::Completed,
            at(-3, 14, 0),
            60,
            20,
            Some("Reviewed relapse prevention plan"),
        ),
        event(
            "emma",
            "individual",
            SessionFormat::InPerson,
            AppointmentStatus::Confirmed,
            at(1, 9, 0),
            60,
            8,
            Some("Prefers morning sessions"),
        ),
        event(
            "michael",
            "couples",
            SessionFormat::InPerson,
            AppointmentStatus::Confirmed,
            at(1, 11, 0),
            90,
            3,
            None,
        ),
        event(
            "sarah",
            "individual",
            SessionFormat::Telehealth,
            AppointmentStatus::Pending,
            at(2, 10, 0),
            60,
            12,
            Some(r#"Client said "much better" this week"#),
        ),
        event(
            "rodriguez",
            "family",
            SessionFormat::InPerson,
            AppointmentStatus::Confirmed,
            at(3, 15, 0),
            90,
            5,
            None,
        ),
        event(
            "mindfulness",
            "group",
            SessionFormat::InPerson,
            AppointmentStatus::Confirmed,
            at(4, 17, 0),
            60,
            6,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_holds_model_invariants() {
        let events = seed_events();
        assert_eq!(events.len(), 6);
        for ev in &events {
            assert!(ev.end > ev.start);
            assert!(ev.rate >= 0.0);
            assert!(ev.session_number > 0);
        }
        let mut ids: Vec<_> = events.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn seed_is_chronological() {
        let events = seed_events();
        for pair in events.windows(2) {
            assert!(pair[0].start <= pair[1].start);
        }
    }
}

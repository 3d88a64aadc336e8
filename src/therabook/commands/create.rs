use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::guard;
use crate::lookup;
use crate::model::{AppointmentEvent, ClientRef};
use crate::store::EventStore;
use chrono::{NaiveDate, NaiveTime};

/// No single session runs longer than a day.
const MAX_DURATION_MINUTES: i64 = 24 * 60;

/// The scheduling form record handed in by the UI. Keys are short
/// enumeration tokens resolved through the static lookup tables.
#[derive(Debug, Clone)]
pub struct AppointmentForm {
    pub client_key: String,
    pub session_type_key: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i64,
    pub location_key: String,
    pub notes: Option<String>,
}

pub fn run<S: EventStore>(store: &mut S, form: AppointmentForm) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(client) = lookup::client(&form.client_key) else {
        result.add_message(CmdMessage::error(format!(
            "Unknown client key: '{}'",
            form.client_key
        )));
        return Ok(result);
    };
    let Some(kind) = lookup::session_type(&form.session_type_key) else {
        result.add_message(CmdMessage::error(format!(
            "Unknown session type key: '{}'",
            form.session_type_key
        )));
        return Ok(result);
    };
    let Some(format) = lookup::location(&form.location_key) else {
        result.add_message(CmdMessage::error(format!(
            "Unknown location key: '{}'",
            form.location_key
        )));
        return Ok(result);
    };
    if !(1..=MAX_DURATION_MINUTES).contains(&form.duration_minutes) {
        result.add_message(CmdMessage::error(format!(
            "Duration must be between 1 and {} minutes.",
            MAX_DURATION_MINUTES
        )));
        return Ok(result);
    }

    let start = form.date.and_time(form.time).and_utc();
    if guard::is_past_date(start) {
        result.add_message(CmdMessage::error(
            "Cannot schedule appointments in the past.",
        ));
        return Ok(result);
    }

    let session_number = next_session_number(store, client.key)?;
    let event = AppointmentEvent::schedule(
        format!("{} - {}", client.name, kind.label),
        start,
        form.duration_minutes,
        ClientRef {
            key: client.key.to_string(),
            name: client.name.to_string(),
            email: client.email.to_string(),
        },
        kind.session_type,
        format,
        session_number,
        client.diagnosis.to_string(),
        form.notes,
        kind.rate,
    );
    store.save_event(&event)?;

    result.add_message(CmdMessage::success(format!(
        "Appointment scheduled for {} on {} at {}.",
        client.name,
        event.start.format("%Y-%m-%d"),
        event.start.format("%H:%M")
    )));
    Ok(result.with_affected_events(vec![event]))
}

/// Next session number for a client: one past their existing event count.
fn next_session_number<S: EventStore>(store: &S, client_key: &str) -> Result<u32> {
    let prior = store
        .list_events()?
        .iter()
        .filter(|e| e.client.key == client_key)
        .count();
    Ok(prior as u32 + 1)
}

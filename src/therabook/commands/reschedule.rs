use crate::commands::{CmdMessage, CmdResult, ConfirmKind, ConfirmRequest};
use crate::error::Result;
use crate::guard;
use crate::store::EventStore;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Move an event to a new start instant (calendar drag-move).
///
/// When `new_end` is omitted the event keeps its stored duration. Status is
/// never altered by a move.
pub fn run<S, F>(
    store: &mut S,
    id: Uuid,
    new_start: DateTime<Utc>,
    new_end: Option<DateTime<Utc>>,
    confirm: F,
) -> Result<CmdResult>
where
    S: EventStore,
    F: FnOnce(&ConfirmRequest) -> bool,
{
    let Some(mut event) = store.find_event(&id)? else {
        return Ok(CmdResult::default());
    };
    let mut result = CmdResult::default();

    if guard::is_past_date(new_start) {
        result.add_message(CmdMessage::error(
            "Cannot reschedule appointments into the past.",
        ));
        return Ok(result);
    }

    let new_end = new_end.unwrap_or(new_start + Duration::minutes(event.duration_minutes));
    if new_end <= new_start {
        result.add_message(CmdMessage::error("End time must be after start time."));
        return Ok(result);
    }

    let request = ConfirmRequest::new(
        ConfirmKind::Info,
        "Move appointment",
        format!(
            "Move \"{}\" from {} to {}?",
            event.title,
            event.start.format("%Y-%m-%d %H:%M"),
            new_start.format("%Y-%m-%d %H:%M")
        ),
    );
    if !confirm(&request) {
        return Ok(CmdResult::cancelled());
    }

    event.start = new_start;
    event.end = new_end;
    event.duration_minutes = (new_end - new_start).num_minutes();
    store.save_event(&event)?;

    result.add_message(CmdMessage::success(format!(
        "Appointment moved to {} at {}.",
        new_start.format("%Y-%m-%d"),
        new_start.format("%H:%M")
    )));
    Ok(result.with_affected_events(vec![event]))
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AppointmentStatus;
use crate::store::EventStore;
use chrono::Duration;
use uuid::Uuid;

/// Clone an event one week forward.
///
/// The copy gets a fresh id, an annotated title, and starts life as
/// `Pending`; every descriptive field carries over unchanged. No temporal
/// guard applies: a one-week projection can never land in the past relative
/// to its own creation.
pub fn run<S: EventStore>(store: &mut S, id: Uuid) -> Result<CmdResult> {
    let Some(source) = store.find_event(&id)? else {
        return Ok(CmdResult::default());
    };

    let mut copy = source.clone();
    copy.id = Uuid::new_v4();
    copy.title = format!("{} (Copy)", source.title);
    copy.start = source.start + Duration::weeks(1);
    copy.end = source.end + Duration::weeks(1);
    copy.status = AppointmentStatus::Pending;
    store.save_event(&copy)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment duplicated to {} at {}.",
        copy.start.format("%Y-%m-%d"),
        copy.start.format("%H:%M")
    )));
    Ok(result.with_affected_events(vec![copy]))
}

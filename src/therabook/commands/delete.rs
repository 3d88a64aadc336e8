use crate::commands::{CmdMessage, CmdResult, ConfirmKind, ConfirmRequest};
use crate::error::Result;
use crate::store::EventStore;
use uuid::Uuid;

/// Remove an event from the collection. Irreversible.
pub fn run<S, F>(store: &mut S, id: Uuid, confirm: F) -> Result<CmdResult>
where
    S: EventStore,
    F: FnOnce(&ConfirmRequest) -> bool,
{
    let Some(event) = store.find_event(&id)? else {
        return Ok(CmdResult::default());
    };

    let request = ConfirmRequest::new(
        ConfirmKind::Destructive,
        "Delete appointment",
        format!(
            "This will permanently remove \"{}\" on {}. This cannot be undone.",
            event.title,
            event.start.format("%Y-%m-%d")
        ),
    );
    if !confirm(&request) {
        return Ok(CmdResult::cancelled());
    }

    store.remove_event(&id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Appointment removed: {}",
        event.title
    )));
    Ok(result.with_affected_events(vec![event]))
}

use crate::commands::{CmdMessage, CmdResult, ConfirmKind, ConfirmRequest};
use crate::error::Result;
use crate::model::AppointmentStatus;
use crate::store::EventStore;
use uuid::Uuid;

/// Mark an event completed. Idempotent: completing an already-completed
/// event leaves the collection as it was.
pub fn complete<S, F>(store: &mut S, id: Uuid, confirm: F) -> Result<CmdResult>
where
    S: EventStore,
    F: FnOnce(&ConfirmRequest) -> bool,
{
    transition(
        store,
        id,
        AppointmentStatus::Completed,
        ConfirmKind::Success,
        "Complete session",
        "completed",
        confirm,
    )
}

/// Cancel an event. Idempotent against re-application.
pub fn cancel<S, F>(store: &mut S, id: Uuid, confirm: F) -> Result<CmdResult>
where
    S: EventStore,
    F: FnOnce(&ConfirmRequest) -> bool,
{
    transition(
        store,
        id,
        AppointmentStatus::Cancelled,
        ConfirmKind::Destructive,
        "Cancel appointment",
        "cancelled",
        confirm,
    )
}

fn transition<S, F>(
    store: &mut S,
    id: Uuid,
    target: AppointmentStatus,
    kind: ConfirmKind,
    title: &str,
    verb: &str,
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

    if event.status == target {
        result.add_message(CmdMessage::info(format!(
            "Appointment is already marked {}.",
            target
        )));
        return Ok(result);
    }
    // Terminal states only leave the collection through delete.
    if event.status.is_terminal() {
        result.add_message(CmdMessage::warning(format!(
            "A {} appointment cannot be {}.",
            event.status.to_string().to_lowercase(),
            verb
        )));
        return Ok(result);
    }

    let request = ConfirmRequest::new(
        kind,
        title,
        format!("Mark \"{}\" as {}?", event.title, target),
    );
    if !confirm(&request) {
        return Ok(CmdResult::cancelled());
    }

    event.status = target;
    store.save_event(&event)?;

    result.add_message(CmdMessage::success(format!(
        "Appointment {}: {}",
        verb, event.title
    )));
    Ok(result.with_affected_events(vec![event]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SessionType;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use chrono::{Duration, Utc};

    fn store_with(status: AppointmentStatus) -> (InMemoryStore, Uuid) {
        let store = StoreFixture::new()
            .with_appointment(
                "Emma Thompson",
                SessionType::Individual,
                status,
                Utc::now() + Duration::days(1),
            )
            .store;
        let id = store.list_events().unwrap()[0].id;
        (store, id)
    }

    #[test]
    fn completes_confirmed_event() {
        let (mut store, id) = store_with(AppointmentStatus::Confirmed);
        let result = complete(&mut store, id, |_| true).unwrap();
        assert_eq!(
            result.affected_events[0].status,
            AppointmentStatus::Completed
        );
        assert_eq!(
            store.find_event(&id).unwrap().unwrap().status,
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn cancel_changes_only_the_status() {
        let (mut store, id) = store_with(AppointmentStatus::Confirmed);
        let before = store.find_event(&id).unwrap().unwrap();
        let mut seen_kind = None;
        cancel(&mut store, id, |req| {
            seen_kind = Some(req.kind);
            true
        })
        .unwrap();

        let after = store.find_event(&id).unwrap().unwrap();
        assert_eq!(after.status, AppointmentStatus::Cancelled);
        assert_eq!(after.id, before.id);
        assert_eq!(after.title, before.title);
        assert_eq!(after.start, before.start);
        assert_eq!(after.end, before.end);
        assert_eq!(after.client, before.client);
        assert_eq!(seen_kind, Some(ConfirmKind::Destructive));
    }

    #[test]
    fn cancel_allowed_from_pending() {
        let (mut store, id) = store_with(AppointmentStatus::Pending);
        cancel(&mut store, id, |_| true).unwrap();
        assert_eq!(
            store.find_event(&id).unwrap().unwrap().status,
            AppointmentStatus::Cancelled
        );
    }

    #[test]
    fn complete_is_idempotent() {
        let (mut store, id) = store_with(AppointmentStatus::Completed);
        let before = store.list_events().unwrap();
        let result = complete(&mut store, id, |_| panic!("no confirmation for a no-op")).unwrap();

        assert_eq!(store.list_events().unwrap(), before);
        assert!(result.messages[0].content.contains("already marked"));
    }

    #[test]
    fn no_transition_out_of_terminal_states() {
        let (mut store, id) = store_with(AppointmentStatus::Cancelled);
        let before = store.list_events().unwrap();
        let result = complete(&mut store, id, |_| true).unwrap();

        assert_eq!(store.list_events().unwrap(), before);
        assert_eq!(result.messages[0].level, crate::commands::MessageLevel::Warning);
    }

    #[test]
    fn declined_confirmation_is_a_no_op() {
        let (mut store, id) = store_with(AppointmentStatus::Confirmed);
        let before = store.list_events().unwrap();
        let result = complete(&mut store, id, |_| false).unwrap();

        assert_eq!(store.list_events().unwrap(), before);
        assert_eq!(result.messages[0].content, "Operation cancelled.");
    }

    #[test]
    fn missing_id_is_a_silent_no_op() {
        let (mut store, _) = store_with(AppointmentStatus::Confirmed);
        let result = complete(&mut store, Uuid::new_v4(), |_| true).unwrap();
        assert!(result.messages.is_empty());
    }
}

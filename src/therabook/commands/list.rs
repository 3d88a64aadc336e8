use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::{filter_events, EventFilter};
use crate::store::EventStore;

/// Read the collection through a filter. Pure over a snapshot: the result
/// keeps the source collection's relative order.
pub fn run<S: EventStore>(store: &S, filter: &EventFilter) -> Result<CmdResult> {
    let events = filter_events(store.list_events()?, filter);
    Ok(CmdResult::default().with_listed_events(events))
}

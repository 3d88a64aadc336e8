use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ScheduleError};
use crate::filter::{filter_events, EventFilter};
use crate::model::AppointmentEvent;
use crate::store::EventStore;
use chrono::Utc;
use std::io::Write;
use std::path::Path;

/// Column order is an explicit list; it never depends on any map iteration.
const HEADER: [&str; 10] = [
    "Date",
    "Time",
    "Client",
    "Type",
    "Format",
    "Status",
    "Duration (min)",
    "Rate",
    "Diagnosis",
    "Notes",
];

/// Serialize the filtered view to a CSV file in `dir`.
///
/// An empty view produces no file, only an informational message. Output is
/// deterministic: the same filtered collection always serializes to the
/// same bytes.
pub fn run<S: EventStore>(store: &S, filter: &EventFilter, dir: &Path) -> Result<CmdResult> {
    // 1. Resolve the current view
    let events = filter_events(store.list_events()?, filter);

    if events.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No appointments to export."));
        return Ok(res);
    }

    // 2. Serialize fully in memory before touching the filesystem
    let mut buf = Vec::new();
    write_csv(&mut buf, &events)?;

    // 3. Write the file in one step, named for the current month context.
    //    A failed write must not leave a partial file at the destination.
    let filename = format!("appointments-{}.csv", Utc::now().format("%Y-%m"));
    let path = dir.join(&filename);
    if let Err(e) = std::fs::write(&path, &buf) {
        let _ = std::fs::remove_file(&path);
        return Err(ScheduleError::Io(e));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} appointments to {}",
        events.len(),
        path.display()
    )));
    result.exported_path = Some(path);
    Ok(result)
}

fn write_csv<W: Write>(mut writer: W, events: &[AppointmentEvent]) -> Result<()> {
    writeln!(writer, "{}", HEADER.join(",")).map_err(ScheduleError::Io)?;

    for ev in events {
        let fields = [
            ev.start.format("%Y-%m-%d").to_string(),
            ev.time_range(),
            ev.client.name.clone(),
            ev.session_type.to_string(),
            ev.format.to_string(),
            ev.status.to_string(),
            ev.duration_minutes.to_string(),
            format!("${:.0}", ev.rate),
            ev.diagnosis.clone(),
            ev.notes.clone().unwrap_or_default(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        writeln!(writer, "{}", row.join(",")).map_err(ScheduleError::Io)?;
    }
    Ok(())
}

/// Standard CSV escaping: fields containing a comma, quote or newline are
/// wrapped in quotes, with embedded quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

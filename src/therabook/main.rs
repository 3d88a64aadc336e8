use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use therabook::api::{CmdMessage, EventAction, MessageLevel, ScheduleApi};
use therabook::commands::create::AppointmentForm;
use therabook::commands::{ConfirmKind, ConfirmRequest};
use therabook::error::{Result, ScheduleError};
use therabook::filter::EventFilter;
use therabook::lookup;
use therabook::model::{AppointmentEvent, AppointmentStatus, SessionFormat, SessionType};
use therabook::store::memory::InMemoryStore;
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands, FilterArgs};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: ScheduleApi<InMemoryStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = AppContext {
        api: ScheduleApi::new(InMemoryStore::seeded()),
    };

    match cli.command {
        Some(Commands::Add {
            client,
            session_type,
            date,
            time,
            duration,
            location,
            notes,
        }) => handle_add(&mut ctx, client, session_type, date, time, duration, location, notes),
        Some(Commands::List { filter, json }) => handle_list(&mut ctx, &filter, json),
        Some(Commands::Move {
            index,
            date,
            time,
            yes,
        }) => handle_move(&mut ctx, index, date, time, yes),
        Some(Commands::Dup { index }) => handle_dup(&mut ctx, index),
        Some(Commands::Done { index, yes }) => handle_done(&mut ctx, index, yes),
        Some(Commands::Cancel { index, yes }) => handle_cancel(&mut ctx, index, yes),
        Some(Commands::Delete { index, yes }) => handle_delete(&mut ctx, index, yes),
        Some(Commands::Export { filter, out }) => handle_export(&mut ctx, &filter, out),
        None => handle_list(
            &mut ctx,
            &FilterArgs {
                session_type: None,
                format: None,
                status: None,
                client: None,
            },
            false,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_add(
    ctx: &mut AppContext,
    client: String,
    session_type: String,
    date: String,
    time: String,
    duration: Option<i64>,
    location: String,
    notes: Option<String>,
) -> Result<()> {
    let duration_minutes = match duration {
        Some(d) => d,
        None => lookup::session_type(&session_type)
            .map(|t| t.default_duration)
            .unwrap_or(60),
    };

    let form = AppointmentForm {
        client_key: client,
        session_type_key: session_type,
        date: parse_date(&date)?,
        time: parse_time(&time)?,
        duration_minutes,
        location_key: location,
        notes,
    };

    let result = ctx.api.schedule(form)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: &FilterArgs, json: bool) -> Result<()> {
    let filter = parse_filter(filter)?;
    let result = ctx.api.events(&filter)?;

    if json {
        let text = serde_json::to_string_pretty(&result.listed_events)
            .map_err(ScheduleError::Serialization)?;
        println!("{}", text);
        return Ok(());
    }

    print_events(&result.listed_events);
    print_messages(&result.messages);
    Ok(())
}

fn handle_move(
    ctx: &mut AppContext,
    index: usize,
    date: String,
    time: String,
    yes: bool,
) -> Result<()> {
    let id = event_id_at(ctx, index)?;
    let new_start = parse_date(&date)?.and_time(parse_time(&time)?).and_utc();

    let result = ctx.api.apply(
        EventAction::Reschedule {
            id,
            new_start,
            new_end: None,
        },
        confirm_or_prompt(yes),
    )?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_dup(ctx: &mut AppContext, index: usize) -> Result<()> {
    let id = event_id_at(ctx, index)?;
    let result = ctx.api.apply(EventAction::Duplicate(id), |_| true)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let id = event_id_at(ctx, index)?;
    let result = ctx
        .api
        .apply(EventAction::Complete(id), confirm_or_prompt(yes))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_cancel(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let id = event_id_at(ctx, index)?;
    let result = ctx
        .api
        .apply(EventAction::Cancel(id), confirm_or_prompt(yes))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, index: usize, yes: bool) -> Result<()> {
    let id = event_id_at(ctx, index)?;
    let result = ctx
        .api
        .apply(EventAction::Delete(id), confirm_or_prompt(yes))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, filter: &FilterArgs, out: Option<PathBuf>) -> Result<()> {
    let filter = parse_filter(filter)?;
    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    let result = ctx.api.export(&filter, &dir)?;
    print_messages(&result.messages);
    Ok(())
}

/// Resolve a 1-based list index into an event id. Indices refer to the
/// unfiltered collection, in the order `list` prints it.
fn event_id_at(ctx: &AppContext, index: usize) -> Result<Uuid> {
    let events = ctx.api.events(&EventFilter::default())?.listed_events;
    index
        .checked_sub(1)
        .and_then(|i| events.get(i))
        .map(|ev| ev.id)
        .ok_or_else(|| ScheduleError::Api(format!("No appointment at index {}", index)))
}

fn confirm_or_prompt(yes: bool) -> impl FnOnce(&ConfirmRequest) -> bool {
    move |request| yes || prompt_confirm(request)
}

/// Interactive confirmation. Anything other than `y`/`yes` declines.
fn prompt_confirm(request: &ConfirmRequest) -> bool {
    let title = match request.kind {
        ConfirmKind::Destructive => request.title.red().bold(),
        ConfirmKind::Success => request.title.green().bold(),
        ConfirmKind::Info => request.title.bold(),
    };
    println!("{}", title);
    println!("{}", request.message);
    print!("Proceed? [y/N] ");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return false;
    }
    let answer = input.trim().to_lowercase();
    answer == "y" || answer == "yes"
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TITLE_WIDTH: usize = 42;

fn print_events(events: &[AppointmentEvent]) {
    if events.is_empty() {
        println!("No appointments found.");
        return;
    }

    for (i, event) in events.iter().enumerate() {
        let idx_str = format!("{:>3}. ", i + 1);
        let when = event.start.format("%a %Y-%m-%d").to_string();

        let title_display = truncate_to_width(&event.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title_display.width());

        let status_colored = match event.status {
            AppointmentStatus::Confirmed => event.status.to_string().green(),
            AppointmentStatus::Pending => event.status.to_string().yellow(),
            AppointmentStatus::Completed => event.status.to_string().blue(),
            AppointmentStatus::Cancelled => event.status.to_string().dimmed(),
            AppointmentStatus::NoShow => event.status.to_string().red(),
        };

        println!(
            "{}{} {}  {}{}  {:<9} {}",
            idx_str.dimmed(),
            when,
            event.time_range(),
            title_display,
            " ".repeat(padding),
            event.format.to_string(),
            status_colored
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ScheduleError::Api(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| ScheduleError::Api(format!("Invalid time '{}', expected HH:MM", s)))
}

fn parse_filter(args: &FilterArgs) -> Result<EventFilter> {
    Ok(EventFilter {
        session_type: parse_filter_token(&args.session_type, SessionType::parse)?,
        format: parse_filter_token(&args.format, SessionFormat::parse)?,
        status: parse_filter_token(&args.status, AppointmentStatus::parse)?,
        client: args
            .client
            .clone()
            .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case("all")),
    })
}

/// "all" (or absence) is the wildcard and leaves the predicate unset.
fn parse_filter_token<T>(
    value: &Option<String>,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Option<T>> {
    match value.as_deref() {
        None => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => parse(v).map(Some).map_err(ScheduleError::Api),
    }
}

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "therabook")]
#[command(about = "Appointment scheduling for therapy practices", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Filter flags shared by `list` and `export`. The literal value "all" is
/// the wildcard and means the predicate is not applied.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Session type (individual, couples, family, group, all)
    #[arg(long = "type")]
    pub session_type: Option<String>,

    /// Delivery format (in-person, telehealth, phone, all)
    #[arg(long)]
    pub format: Option<String>,

    /// Status (confirmed, pending, completed, cancelled, no-show, all)
    #[arg(long)]
    pub status: Option<String>,

    /// Substring of the client name (case-insensitive)
    #[arg(long)]
    pub client: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Schedule a new appointment
    #[command(alias = "a")]
    Add {
        /// Client key (e.g. emma, sarah, rodriguez)
        #[arg(long)]
        client: String,

        /// Session type key (individual, couples, family, group)
        #[arg(long = "type")]
        session_type: String,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Start time (HH:MM)
        #[arg(long)]
        time: String,

        /// Duration in minutes (defaults to the session type's usual length)
        #[arg(long)]
        duration: Option<i64>,

        /// Location key (office, video, phone)
        #[arg(long, default_value = "office")]
        location: String,

        /// Free-text note
        #[arg(long)]
        notes: Option<String>,
    },

    /// List appointments
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Emit the filtered view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move an appointment to a new date and time
    #[command(alias = "mv")]
    Move {
        /// Index of the appointment (from `list`)
        index: usize,

        /// New date (YYYY-MM-DD)
        date: String,

        /// New start time (HH:MM)
        time: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Duplicate an appointment one week forward
    Dup {
        /// Index of the appointment (from `list`)
        index: usize,
    },

    /// Mark a session completed
    Done {
        /// Index of the appointment (from `list`)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Cancel an appointment
    Cancel {
        /// Index of the appointment (from `list`)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Permanently remove an appointment
    #[command(alias = "rm")]
    Delete {
        /// Index of the appointment (from `list`)
        index: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the filtered view to a CSV file
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        out: Option<std::path::PathBuf>,
    },
}

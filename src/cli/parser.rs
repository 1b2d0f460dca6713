use crate::models::Role;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for roomroster
#[derive(Parser)]
#[command(
    name = "roomroster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan shared rooms and office duty for seniors and interns across the Sunday-Thursday week",
    long_about = None
)]
pub struct Cli {
    /// Override employee data file (useful for tests or a custom store)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ScheduleKind {
    /// Weekly room presence and office duty
    Generate,
    /// Seniors available to interns in the anchor week
    Interns,
    /// Free rooms in the anchor week
    Rooms,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty employee store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL)
        #[arg(long = "editor")]
        editor: Option<String>,
    },

    /// Run the HTTP service
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(long, short)]
        port: Option<u16>,
    },

    /// List employees
    List {
        /// Only show one role
        #[arg(long, value_enum)]
        role: Option<Role>,
    },

    /// Add an employee
    Add {
        /// Display name
        name: String,

        #[arg(long, value_enum)]
        role: Role,

        /// Employment fraction: 100 or 80
        #[arg(long, default_value_t = 100)]
        employment: u8,

        /// Room number (seniors only)
        #[arg(long)]
        room: Option<String>,
    },

    /// Update an existing employee
    Edit {
        /// Employee id (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// New room number; pass an empty string to clear it
        #[arg(long)]
        room: Option<String>,

        /// Mark present on a date (YYYY-MM-DD or weekday name); repeatable
        #[arg(long = "available", value_name = "DAY")]
        available: Vec<String>,

        /// Mark absent on a date (YYYY-MM-DD or weekday name); repeatable
        #[arg(long = "unavailable", value_name = "DAY")]
        unavailable: Vec<String>,

        /// Work with interns in week N (1-4); repeatable
        #[arg(long = "interns-week", value_name = "N")]
        interns_week: Vec<u8>,

        /// Do not work with interns in week N (1-4); repeatable
        #[arg(long = "no-interns-week", value_name = "N")]
        no_interns_week: Vec<u8>,
    },

    /// Delete an employee
    Del {
        /// Employee id (UUID)
        id: String,
    },

    /// Print the workdays of the planning month
    Dates {
        /// Month to enumerate (YYYY-MM); defaults to the current month
        #[arg(long)]
        month: Option<String>,
    },

    /// Compute and print a schedule
    Schedule {
        #[arg(long, value_enum, default_value = "generate")]
        kind: ScheduleKind,

        /// Print raw JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

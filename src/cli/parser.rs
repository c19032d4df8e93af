use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for schedlog
/// CLI application to log scheduled deliveries and raise slot alerts
#[derive(Parser)]
#[command(
    name = "schedlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple schedule logging CLI: record deliveries, export them, and get time-slot alerts",
    long_about = None
)]
pub struct Cli {
    /// Override the events file path (useful for tests or custom data dirs)
    #[arg(global = true, long = "events-file")]
    pub events_file: Option<String>,

    /// Override the users file path
    #[arg(global = true, long = "users-file")]
    pub users_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data files
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Log a new delivery
    Add {
        /// Time slot of the delivery (HH:MM-HH:MM)
        time_slot: String,

        /// Client name
        #[arg(long = "client")]
        client: String,

        #[arg(long = "type", help = "Delivery type")]
        delivery_type: Option<String>,

        #[arg(long = "resource", help = "Resource used for the delivery")]
        resource: Option<String>,

        #[arg(long = "assigned", help = "Person the delivery is assigned to")]
        assigned_to: Option<String>,

        #[arg(long = "signature", help = "Signature field")]
        signature: Option<String>,

        #[arg(long = "length", help = "Expected length of the delivery")]
        length: Option<String>,

        #[arg(long = "notes", help = "Free-form notes")]
        notes: Option<String>,

        /// Alert lead time in minutes (default 5; bad input falls back to 5)
        #[arg(long = "alert")]
        alert: Option<String>,
    },

    /// List logged deliveries, most recent first
    List {
        #[arg(long = "date", help = "Only events created on this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "client", help = "Only events whose client contains this text")]
        client: Option<String>,
    },

    /// Edit an existing delivery by id
    Edit {
        /// Id of the event to edit
        id: u32,

        #[arg(long = "slot", help = "New time slot (HH:MM-HH:MM)")]
        time_slot: Option<String>,

        #[arg(long = "client")]
        client: Option<String>,

        #[arg(long = "type", help = "Delivery type")]
        delivery_type: Option<String>,

        #[arg(long = "resource")]
        resource: Option<String>,

        #[arg(long = "assigned")]
        assigned_to: Option<String>,

        #[arg(long = "signature")]
        signature: Option<String>,

        #[arg(long = "length")]
        length: Option<String>,

        #[arg(long = "notes")]
        notes: Option<String>,

        #[arg(long = "alert", help = "Alert lead time in minutes")]
        alert: Option<String>,
    },

    /// Delete a delivery by id
    Del {
        /// Id of the event to delete
        id: u32,
    },

    /// Export the full event collection
    Export {
        #[arg(long = "format", value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "file", help = "Output file (default: timestamped name)")]
        file: Option<String>,
    },

    /// Aggregate counts per client and delivery type
    Summary {
        #[arg(long = "date", help = "Restrict to events created on this date")]
        date: Option<String>,
    },

    /// Check or reset today's alerts
    Alerts {
        #[arg(long = "check", help = "Run one evaluation pass now")]
        check: bool,

        #[arg(long = "reset", help = "Re-arm all of today's alerts")]
        reset: bool,
    },

    /// Run the alert monitor in the foreground
    Watch {
        #[arg(long = "interval", help = "Seconds between passes (default: config)")]
        interval: Option<u64>,

        #[arg(long = "seconds", help = "Stop after this many seconds (default: until Enter)")]
        seconds: Option<u64>,
    },

    /// Manage user accounts
    Users {
        #[arg(long = "list", help = "List all accounts")]
        list: bool,

        #[arg(long = "add", help = "Username of the account to create")]
        add: Option<String>,

        #[arg(long = "password", help = "Password for --add or --check")]
        password: Option<String>,

        #[arg(long = "role", help = "Role for --add: admin or user", default_value = "user")]
        role: String,

        #[arg(long = "name", help = "Display name for --add")]
        name: Option<String>,

        #[arg(long = "check", help = "Username to authenticate (with --password)")]
        check: Option<String>,
    },
}

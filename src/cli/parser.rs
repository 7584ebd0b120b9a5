use crate::export::ExportFormat;
use crate::models::Period;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkLog
/// CLI application to log work intervals with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work log CLI: record intervals by category and project, export reports, chart your hours",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a work interval
    Add {
        /// Date of the interval (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        start: String,

        /// End time (HH:MM); earlier than start means the interval ends after midnight
        end: String,

        #[arg(long, short = 'c', help = "Category label (max 50 chars)")]
        category: Option<String>,

        #[arg(long, short = 'p', help = "Project label (max 100 chars)")]
        project: Option<String>,

        #[arg(long, short = 'n', help = "Optional free-text note (max 300 chars)")]
        note: Option<String>,
    },

    /// Delete an entry by ID
    Del {
        /// Entry id as shown by `list`
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries (newest first), with durations and total
    List {
        /// Restrict to a day, week or month around --date
        #[arg(long, value_enum)]
        period: Option<Period>,

        /// Anchor date for --period (YYYY-MM-DD, default: today)
        #[arg(long, requires = "period")]
        date: Option<String>,

        /// Do not re-render the category chart
        #[arg(long = "no-chart")]
        no_chart: bool,
    },

    /// Export the entries of a period as PDF report, CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "week")]
        period: Period,

        /// Anchor date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Output file path (absolute); default: reports directory from config
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Render the category breakdown chart (PNG)
    Chart {
        /// Output image; default: `chart_path` from config
        #[arg(long, value_name = "FILE")]
        file: Option<String>,
    },

    /// Look up terms in the glossary spreadsheet
    Glossary {
        /// Spreadsheet to read; default: `glossary_file` from config
        #[arg(long, value_name = "FILE", global = true)]
        file: Option<String>,

        #[command(subcommand)]
        action: GlossaryAction,
    },
}

#[derive(Subcommand)]
pub enum GlossaryAction {
    /// Print the explanation of a term (case-insensitive exact match)
    Search { term: String },

    /// Print up to N terms starting with the given prefix
    Complete { prefix: String },
}

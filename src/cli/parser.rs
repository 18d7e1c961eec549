use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface definition for subtracker
/// CLI application to import, query and export subsidy records
#[derive(Parser)]
#[command(
    name = "subtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Import, normalize and query subsidy records from spreadsheet exports, backed by SQLite",
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

/// Filter options shared by list / totals / export.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Free-text search across name, project, file id, code and modality
    #[arg(long, short)]
    pub search: Option<String>,

    /// Exact status (e.g. CONCEDIDA, DENEGADA, JUSTIFICADA)
    #[arg(long)]
    pub estado: Option<String>,

    /// Exact allocation year
    #[arg(long)]
    pub anyo: Option<String>,

    /// Exact modality
    #[arg(long)]
    pub modalidad: Option<String>,

    /// Exact project name
    #[arg(long)]
    pub proyecto: Option<String>,

    /// Phase filter: a phase number 1-8, or 'none' for no active phases
    #[arg(long)]
    pub fase: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SortArg {
    Nombre,
    Otorgado,
    #[default]
    Creacion,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Import a spreadsheet export, replacing the stored record set
    Import {
        /// Path of the delimited export file
        file: String,

        /// Extract and report without touching the database
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Print every cell that was defaulted or corrected
        #[arg(long)]
        diagnostics: bool,
    },

    /// List records
    List {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, value_enum, default_value_t = SortArg::Creacion)]
        sort: SortArg,
    },

    /// Show aggregate amounts over the (filtered) record set
    Totals {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Add a single record by hand
    Add {
        /// Display name of the subsidy
        nombre: String,

        #[arg(long)]
        proyecto: Option<String>,

        #[arg(long)]
        estado: Option<String>,

        #[arg(long)]
        anyo: Option<String>,

        #[arg(long)]
        modalidad: Option<String>,

        /// Granted amount, any supported spreadsheet format ("1.234,56€")
        #[arg(long)]
        otorgado: Option<String>,

        /// Requested amount, any supported spreadsheet format
        #[arg(long)]
        solicitado: Option<String>,
    },

    /// Edit a stored record's fields in place
    Edit {
        /// Id of the record to edit
        id: i64,

        #[arg(long)]
        nombre: Option<String>,

        #[arg(long)]
        proyecto: Option<String>,

        #[arg(long)]
        estado: Option<String>,

        #[arg(long)]
        anyo: Option<String>,

        #[arg(long)]
        modalidad: Option<String>,

        /// Granted amount, any supported spreadsheet format ("1.234,56€")
        #[arg(long)]
        otorgado: Option<String>,

        /// Requested amount, any supported spreadsheet format
        #[arg(long)]
        solicitado: Option<String>,

        /// Mark a phase 1-8 as reached, or 'none' to clear all phases
        #[arg(long)]
        fase: Option<String>,
    },

    /// Delete a record by id, or the whole set
    Del {
        #[arg(long, conflicts_with = "all")]
        id: Option<i64>,

        #[arg(long)]
        all: bool,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Export the (filtered) record set
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the database (migrations, integrity checks)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },
}

//! gpa CLI — term and cumulative GPA from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gpa", version, about = "Term and cumulative GPA calculator")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate term and cumulative GPA
    Calculate {
        /// Course as GRADE[:CREDIT], e.g. "AA:3" or "3.7:2" (repeatable)
        #[arg(
            long = "course",
            short = 'c',
            required_unless_present = "from_last",
            allow_hyphen_values = true
        )]
        courses: Vec<String>,

        /// Previous cumulative GPA
        #[arg(long, allow_negative_numbers = true)]
        existing_gpa: Option<f64>,

        /// Credits behind the previous GPA [default: 0]
        #[arg(long)]
        existing_credits: Option<u32>,

        /// Start from the last submitted input; given options override it
        #[arg(long)]
        from_last: bool,

        /// Label stored with the calculation, e.g. "Fall 2024"
        #[arg(long)]
        label: Option<String>,

        /// Do not record the calculation in the history
        #[arg(long)]
        no_save: bool,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List saved calculations, most recent first
    History {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show the GPA trend across saved calculations
    Trend,

    /// Show one saved calculation
    Show {
        /// Calculation id
        #[arg(long)]
        id: String,
    },

    /// Delete a saved calculation
    Delete {
        /// Calculation id
        #[arg(long)]
        id: String,
    },

    /// Print the last submitted input
    Last,

    /// Remove all stored data
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("gpa=info,gpa_core=info,gpa_storage=info")
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Calculate {
            courses,
            existing_gpa,
            existing_credits,
            from_last,
            label,
            no_save,
            format,
        } => commands::calculate::execute(
            config,
            courses,
            existing_gpa,
            existing_credits,
            from_last,
            label,
            no_save,
            format,
        ),
        Commands::History { format } => commands::history::execute(config, format),
        Commands::Trend => commands::trend::execute(config),
        Commands::Show { id } => commands::show::execute(config, id),
        Commands::Delete { id } => commands::delete::execute(config, id),
        Commands::Last => commands::last::execute(config),
        Commands::Clear { yes } => commands::clear::execute(config, yes),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

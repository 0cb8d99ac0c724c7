//! campcal CLI
//!
//! Browse campsites by agency and export booking-open dates to calendars.

use std::path::PathBuf;

use campcal::{
    config::{CONFIG_FILE, load_all},
    error::{AppError, Result},
    pipeline,
    storage::LocalExportDir,
    utils,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// campcal - Campsite Booking Calendar
#[derive(Parser, Debug)]
#[command(
    name = "campcal",
    version,
    about = "Washington State campsite booking-window calendar"
)]
struct Cli {
    /// Directory containing config.toml and the campsite data
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Resolve dates as of this day (YYYY-MM-DD) instead of the local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List managing agencies with their campsite counts
    Agencies,

    /// List upcoming booking-open dates
    List {
        /// Only include campsites managed by this agency (repeatable)
        #[arg(short, long)]
        agency: Vec<String>,
    },

    /// Show booking windows for one campsite
    Show {
        /// Campsite id, name or slug
        site: String,
    },

    /// Print a calendar-service link for a booking window
    Url {
        /// Campsite id, name or slug
        site: String,

        /// Zero-based index of the availability window
        #[arg(short, long, default_value_t = 0)]
        window: usize,
    },

    /// Save an .ics calendar file for a booking window
    Export {
        /// Campsite id, name or slug
        site: String,

        /// Zero-based index of the availability window
        #[arg(short, long, default_value_t = 0)]
        window: usize,

        /// Output directory (default: {data_dir}/exports)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Look up reservation dates from the configured backend
    Details {
        /// Campsite ids, names or slugs
        #[arg(required = true)]
        sites: Vec<String>,
    },

    /// Validate configuration and campsite data
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read the clock once so every date in this run agrees.
    let today = cli.today.unwrap_or_else(utils::today);
    let load = || {
        let loaded = load_all(&cli.data_dir)?;
        log::debug!(
            "Loaded {} campsites using {}",
            loaded.1.len(),
            cli.data_dir.join(CONFIG_FILE).display()
        );
        Ok::<_, AppError>(loaded)
    };

    match cli.command {
        Command::Validate => pipeline::run_validate(&cli.data_dir)?,

        Command::Agencies => {
            let (_, catalog) = load()?;
            pipeline::run_agencies(&catalog);
        }

        Command::List { agency } => {
            let (_, catalog) = load()?;
            pipeline::run_list(&catalog, &agency, today);
        }

        Command::Show { site } => {
            let (_, catalog) = load()?;
            pipeline::run_show(&catalog, &site, today)?;
        }

        Command::Url { site, window } => {
            let (_, catalog) = load()?;
            let url = pipeline::run_url(&catalog, &site, window, today)?;
            println!("{url}");
        }

        Command::Export {
            site,
            window,
            output,
        } => {
            let (config, catalog) = load()?;
            let dir = output.unwrap_or_else(|| config.export_path(&cli.data_dir));
            let sink = LocalExportDir::new(dir);
            let saved = pipeline::run_export(&catalog, &sink, &site, window, today).await?;
            println!("{}", saved.location);
        }

        Command::Details { sites } => {
            let (config, catalog) = load()?;
            let failures = pipeline::run_details(&config.backend, &catalog, &sites, today).await?;
            if failures > 0 {
                return Err(AppError::backend(
                    sites.join(", "),
                    format!("{failures} lookup(s) failed"),
                ));
            }
        }
    }

    Ok(())
}

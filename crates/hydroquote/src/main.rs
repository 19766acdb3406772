//! HydroQuote CLI - quotation helper for waterproofing contractors.
//!
//! Keeps the company/signatory record printed on quotations and offers
//! AI-assisted wording for the notes section and line-item descriptions.
//! When no API key is configured (or the provider fails) the text you typed
//! is printed back unchanged.
//!
//! # Usage
//!
//! ```bash
//! # Polish the notes section of a quotation
//! hydroquote notes "zero observações" --project-type "Impermeabilização de Laje"
//!
//! # Suggest a line-item description
//! hydroquote describe "manta asfáltica" --category material
//!
//! # Fill in company data interactively
//! hydroquote company edit
//!
//! # View configuration
//! hydroquote config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// HydroQuote - quotation helper for waterproofing contractors.
#[derive(Parser, Debug)]
#[command(name = "hydroquote")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Improve (or seed) the notes section of a quotation
    Notes(cli::enrich::NotesArgs),

    /// Suggest a professional description for a line item
    Describe(cli::enrich::DescribeArgs),

    /// View and edit the company/signatory record
    Company(cli::company::CompanyArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match hydroquote_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `hydroquote config path`."
            );
            hydroquote_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("HydroQuote v{}", hydroquote_core::VERSION);

    match cli.command {
        Commands::Notes(args) => cli::enrich::execute_notes(args, config).await,
        Commands::Describe(args) => cli::enrich::execute_describe(args, config).await,
        Commands::Company(args) => cli::company::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}

//! Binary entry point for diaglab.
//!
//! This binary provides the CLI front end for the diagnostic model catalog.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use diaglab::catalog::load_catalog_from_path;
use diaglab::cli::{self, OutputFormat};
use diaglab::observability::{self, LoggingConfig};
use diaglab::{CatalogStore, DashboardSession, DiaglabConfig, ModelId, evaluate, parse_filter_query};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Diaglab - AI-assisted diagnostics model catalog.
#[derive(Parser)]
#[command(name = "diaglab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (.json, .toml, .yaml) to use instead of the built-in catalog.
    #[arg(long, global = true, env = "DIAGLAB_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List models matching the search and filters.
    List {
        /// Search text matched against title, description and tags.
        #[arg(short, long)]
        search: Option<String>,

        /// Modality filter: Imaging, Signal or all.
        #[arg(short, long)]
        modality: Option<String>,

        /// Status filter: Stable, Beta, Research or all.
        #[arg(long)]
        status: Option<String>,

        /// Filter query, e.g. "modality:imaging status:stable lesion".
        #[arg(short, long)]
        query: Option<String>,

        /// Enable these model ids before listing (repeatable; already enabled ids stay on).
        #[arg(short, long = "enable")]
        enable: Vec<String>,

        /// Output format: table, json or yaml.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show one model.
    Show {
        /// Model id.
        id: String,

        /// Output format: table, json or yaml.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Start an interactive view session.
    Session,

    /// Print the clinical-use notice.
    Notice,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match DiaglabConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let logging = LoggingConfig::from_settings(Some(&config.logging), cli.verbose);
    if let Err(e) = observability::init(&logging) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: DiaglabConfig) -> anyhow::Result<()> {
    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());
    let store = load_store(catalog_path)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List {
            search,
            modality,
            status,
            query,
            enable,
            format,
        } => {
            let format = format.map_or(config.output_format, |f| OutputFormat::parse(&f));
            cmd_list(
                store,
                ListArgs {
                    search,
                    modality,
                    status,
                    query,
                    enable,
                },
                format,
                cli.verbose,
                &mut out,
            )
        },
        Commands::Show { id, format } => {
            let format = format.map_or(config.output_format, |f| OutputFormat::parse(&f));
            cmd_show(&store, &id, format, &mut out)
        },
        Commands::Session => {
            let mut session = DashboardSession::new(store);
            let stdin = io::stdin();
            cli::run_session(&mut session, stdin.lock(), &mut out, cli.verbose)?;
            Ok(())
        },
        Commands::Notice => {
            writeln!(out, "{}", cli::CLINICAL_NOTICE)?;
            Ok(())
        },
    }
}

/// Loads the configured catalog or falls back to the built-in one.
fn load_store(path: Option<PathBuf>) -> anyhow::Result<CatalogStore> {
    match path {
        Some(path) => load_catalog_from_path(&path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Ok(CatalogStore::seeded()),
    }
}

/// Filter arguments of the `list` command.
struct ListArgs {
    search: Option<String>,
    modality: Option<String>,
    status: Option<String>,
    query: Option<String>,
    enable: Vec<String>,
}

/// List command.
fn cmd_list<W: Write>(
    mut store: CatalogStore,
    args: ListArgs,
    format: OutputFormat,
    verbose: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    // Only off→on transitions, so repeats and pre-enabled records stay on.
    for id in &args.enable {
        let id = ModelId::new(id.as_str());
        match store.get(&id).map(|record| record.enabled) {
            Some(false) => {
                store.toggle(&id);
            },
            Some(true) => {},
            None => eprintln!("Warning: no model with id {id}"),
        }
    }

    // Explicit flags win over the same dimension in --query.
    let mut query = args
        .query
        .as_deref()
        .map(parse_filter_query)
        .unwrap_or_default();
    if let Some(search) = args.search {
        query.set_search_text(search);
    }
    if let Some(modality) = args.modality {
        query.set_modality_filter(modality);
    }
    if let Some(status) = args.status {
        query.set_status_filter(status);
    }

    let visible = evaluate(store.records(), &query);
    match format {
        OutputFormat::Table => {
            cli::write_table(out, &visible, verbose)?;
            cli::write_summary(out, visible.len(), store.len(), store.enabled_count())?;
        },
        OutputFormat::Json => cli::write_json(out, &visible)?,
        OutputFormat::Yaml => cli::write_yaml(out, &visible)?,
    }
    Ok(())
}

/// Show command.
fn cmd_show<W: Write>(
    store: &CatalogStore,
    id: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(record) = store.get(&ModelId::new(id)) else {
        bail!(diaglab::Error::InvalidInput(format!("no model with id {id}")));
    };
    match format {
        OutputFormat::Table => cli::write_detail(out, record)?,
        OutputFormat::Json => cli::write_json(out, record)?,
        OutputFormat::Yaml => cli::write_yaml(out, record)?,
    }
    Ok(())
}

//! apigen command line
//!
//! This binary scaffolds a CRUD API for an existing entity: a controller and
//! a form type, plus optional TypeScript and Angular client code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use apigen_cli::prompt::ask_entity;
use apigen_cli::{format_report, CliError, Result};
use clap::{Parser, Subcommand};
use config::Config;
use metadata::{EntityCatalog, MetadataSource};
use pipeline::{GenerationContext, GenerationRequest};
use tracing::debug;

/// Command-line interface configuration for apigen.
#[derive(Parser, Debug)]
#[command(name = "apigen", about = "CRUD API scaffolding from entity metadata", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
    /// Project root (defaults to the nearest directory holding composer.json)
    #[arg(long, global = true)]
    project_dir: Option<PathBuf>,
    /// Configuration file to use instead of apigen.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Entity catalog to read instead of the configured one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

/// Available apigen commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a CRUD controller and form type for an entity
    MakeApi {
        /// Entity class to create CRUD for (e.g. Product)
        entity_class: Option<String>,
        /// Also generate a TypeScript interface for the entity
        #[arg(long, visible_alias = "ts")]
        interface: bool,
        /// Also generate an Angular data service
        #[arg(long, visible_alias = "ng")]
        angular: bool,
        /// Also generate the shared abstract Angular service
        #[arg(long, visible_alias = "ng-base")]
        angular_base: bool,
    },
    /// List entity names known to the catalog
    Entities,
}

/// Main entry point for the apigen application.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = resolve_project_root(cli.project_dir.as_deref())?;
    let config = Config::load(&project_root, cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let log_file = config.logging.file.as_ref().map(|file| project_root.join(file));
    logging::init(level, log_file.as_deref())?;
    debug!(root = %project_root.display(), "project root resolved");

    let mut ctx = GenerationContext::from_config(&project_root, &config);
    if let Some(catalog) = cli.catalog {
        ctx.catalog_path = catalog;
    }

    match cli.cmd {
        Commands::MakeApi { entity_class, interface, angular, angular_base } => {
            let entity = match entity_class {
                Some(entity) => entity,
                None => ask_for_entity(&ctx)?,
            };
            let request = GenerationRequest::new(entity)
                .interface(interface)
                .angular(angular)
                .angular_base(angular_base);

            let report = pipeline::run_in_project(&ctx, &request)?;
            print!("{}", format_report(&report, &ctx.project_root));
        }
        Commands::Entities => {
            for name in load_entity_names(&ctx)? {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

/// Explicit directory, else the nearest composer project, else the working directory.
fn resolve_project_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    Ok(apigen_path::find_project_root_from(&cwd).unwrap_or(cwd))
}

fn load_entity_names(ctx: &GenerationContext) -> Result<Vec<String>> {
    let catalog = EntityCatalog::from_file(&ctx.catalog_path)?;
    Ok(catalog.entities_for_autocomplete(&ctx.entity_namespace()))
}

fn ask_for_entity(ctx: &GenerationContext) -> Result<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::MissingEntity);
    }
    ask_entity(load_entity_names(ctx)?)
}

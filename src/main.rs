//! planwright - Main entry point
//!
//! Thin command-line surface over the selection engine: list the catalog,
//! validate catalog files, and replay selection operations into a plan.

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use planwright::catalog::Catalog;
use planwright::catalog_file::CatalogFile;
use planwright::cli::{Cli, Commands};
use planwright::error::PlanwrightError;
use planwright::logic::status::prerequisite_status;
use planwright::ops::PlanOp;
use planwright::selection::Selection;
use planwright::session::PlanSession;
use planwright::templates::TemplateRegistry;
use planwright::types::{ModuleId, join_ids};

/// Exit code for rejected operations and invalid input
const EXIT_INVALID: i32 = 1;
/// Exit code for catalog integrity faults (prerequisite cycles)
const EXIT_CORRUPT_CATALOG: i32 = 2;

/// Initialize tracing with appropriate settings
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Allows RUST_LOG env var to override
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,planwright={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);
    debug!("CLI arguments parsed");

    match cli.command {
        Commands::Validate { catalog } => {
            info!("Validating catalog file: {:?}", catalog);
            let checked = CatalogFile::load_from_file(&catalog).and_then(|file| {
                file.validate()?;
                Ok(file)
            });
            match checked {
                Ok(file) => {
                    println!(
                        "✓ Catalog file is valid: {} modules, {} templates",
                        file.modules.len(),
                        file.templates.len()
                    );
                }
                Err(e) => {
                    error!("Catalog validation failed: {:#}", e);
                    eprintln!("✗ Catalog validation failed: {:#}", e);
                    std::process::exit(EXIT_INVALID);
                }
            }
        }
        Commands::Modules => {
            let (catalog, _) = load_sources(cli.catalog.as_deref())?;
            print_modules(&catalog);
        }
        Commands::Templates => {
            let (_, templates) = load_sources(cli.catalog.as_deref())?;
            for template in templates.iter() {
                println!("{:<20} {}", template.id, template.description);
                println!("{:<20} {}", "", join_ids(&template.modules));
            }
        }
        Commands::Plan {
            template,
            json,
            ops,
        } => {
            let (catalog, templates) = load_sources(cli.catalog.as_deref())?;
            run_plan(&catalog, &templates, template.as_deref(), &ops, json)?;
        }
        Commands::Status { module, selected } => {
            let (catalog, _) = load_sources(cli.catalog.as_deref())?;
            let selection = Selection::from_ids(selected);
            match prerequisite_status(&catalog, &ModuleId::new(module.as_str()), &selection) {
                Ok(status) => println!("{}", serde_json::to_string_pretty(&status)?),
                Err(e) => exit_with(&PlanwrightError::from(e)),
            }
        }
    }

    Ok(())
}

/// Load the catalog file if one was given, the built-ins otherwise.
///
/// Both go through the same integrity checks; a prerequisite cycle exits
/// with [`EXIT_CORRUPT_CATALOG`].
fn load_sources(path: Option<&Path>) -> Result<(Catalog, TemplateRegistry)> {
    let (file, origin) = match path {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            (CatalogFile::load_from_file(path)?, format!("Catalog {:?}", path))
        }
        None => {
            debug!("Using built-in catalog");
            (CatalogFile::builtin(), "Built-in catalog".to_string())
        }
    };

    match file.into_parts() {
        Ok(parts) => Ok(parts),
        Err(e) if e.is_fatal() => exit_with(&e),
        Err(e) => Err(e).with_context(|| format!("{} failed integrity checks", origin)),
    }
}

fn print_modules(catalog: &Catalog) {
    for module in catalog.iter() {
        let requires = if module.has_prerequisites() {
            format!(" (requires {})", join_ids(&module.prerequisites))
        } else {
            String::new()
        };
        println!(
            "{:<22} {:<11} {:>2}  {}{}",
            module.id,
            module.category.label(),
            module.size,
            module.description,
            requires
        );
    }
}

fn run_plan(
    catalog: &Catalog,
    templates: &TemplateRegistry,
    template: Option<&str>,
    ops: &[String],
    json: bool,
) -> Result<()> {
    let mut session = PlanSession::new(catalog, templates);

    let mut parsed = Vec::with_capacity(ops.len() + 1);
    if let Some(id) = template {
        parsed.push(PlanOp::Template(id.to_string()));
    }
    for raw in ops {
        match raw.parse::<PlanOp>() {
            Ok(op) => parsed.push(op),
            Err(e) => exit_with(&e),
        }
    }

    for op in &parsed {
        debug!("Applying {}", op);
        if let Err(e) = op.apply(&mut session) {
            eprintln!("✗ {} rejected", op);
            exit_with(&e);
        }
    }

    for violation in session.precedence_violations() {
        tracing::warn!(
            "'{}' is ahead of its prerequisite '{}' ({:?})",
            violation.dependent,
            violation.prerequisite,
            violation.kind
        );
    }

    let summary = session.summary();
    let plan = session.finalize();

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    for (pos, id) in plan.modules.iter().enumerate() {
        match catalog.get(id) {
            Some(module) => println!(
                "{:>3}. {:<22} {:<11} {:>2}",
                pos + 1,
                id,
                module.category.label(),
                module.size
            ),
            None => println!("{:>3}. {}", pos + 1, id),
        }
    }
    print!("{}", summary);
    Ok(())
}

/// Report an error and exit, keeping catalog faults distinct.
fn exit_with(e: &PlanwrightError) -> ! {
    if e.is_fatal() {
        error!("Catalog integrity fault: {}", e);
        eprintln!("✗ Catalog integrity fault: {}", e);
        std::process::exit(EXIT_CORRUPT_CATALOG);
    }
    eprintln!("✗ {}", e);
    std::process::exit(EXIT_INVALID);
}

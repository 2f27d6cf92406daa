//! rigbuilder - Main entry point
//!
//! Parses the command line, sets up logging, and either runs the interactive
//! wizard or one of the scripting subcommands.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use rigbuilder::advisor::{self, Advisor};
use rigbuilder::app::App;
use rigbuilder::build_state::BuildState;
use rigbuilder::catalog::Catalog;
use rigbuilder::cli::{Cli, Commands};
use rigbuilder::compat::{constraint_hint, eligible_parts};
use rigbuilder::config_file::AdvisorConfig;
use rigbuilder::error::RigError;
use rigbuilder::summary::{format_inr, BuildSummary};
use rigbuilder::types::Category;

/// Where TUI logs go unless `--log-file` says otherwise
fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("rigbuilder.log")
}

/// Initialize tracing. The TUI owns the terminal, so it logs to a file;
/// everything else logs to stderr. `RUST_LOG` overrides the level.
fn init_logger(tui: bool, log_file: Option<&Path>) -> Result<()> {
    if tui {
        let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {:?}", path))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse();
    let tui = matches!(cli.command, None | Some(Commands::Run { .. }));
    init_logger(tui, cli.log_file.as_deref())?;
    info!("rigbuilder {} starting up", env!("CARGO_PKG_VERSION"));
    debug!("CLI arguments: {:?}", cli);

    match cli.command {
        Some(Commands::Validate { ref file }) => validate_file(file),
        Some(Commands::Parts {
            category,
            ref with,
            json,
        }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            list_parts(&catalog, category, with, json)
        }
        Some(Commands::Summary {
            ref parts,
            ref output,
            review,
        }) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let advisor = review.then(|| load_advisor(cli.config.as_deref(), cli.offline)).transpose()?;
            print_summary(&catalog, parts, output.as_deref(), advisor.as_deref())
        }
        Some(Commands::Run { ref output }) => run_tui(&cli, output.clone()),
        None => {
            info!("No command specified, launching wizard");
            run_tui(&cli, PathBuf::from("rig-summary.txt"))
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path),
        None => Ok(Catalog::builtin()),
    }
}

fn load_config(path: Option<&Path>) -> Result<AdvisorConfig> {
    let config = match path {
        Some(path) => AdvisorConfig::load_from_file(path)?,
        None => AdvisorConfig::default(),
    };
    config.validate().context("Invalid advisor configuration")?;
    Ok(config)
}

fn load_advisor(config: Option<&Path>, offline: bool) -> Result<Box<dyn Advisor>> {
    let config = load_config(config)?;
    Ok(advisor::from_config(&config, offline))
}

/// Run the interactive wizard
fn run_tui(cli: &Cli, summary_path: PathBuf) -> Result<()> {
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = load_config(cli.config.as_deref())?;
    let advisor: Arc<dyn Advisor> = Arc::from(advisor::from_config(&config, cli.offline));

    debug!("Initializing terminal for TUI mode");
    enable_raw_mode().map_err(|e| RigError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| RigError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| RigError::terminal(format!("Failed to create terminal: {}", e)))
        .and_then(|mut terminal| {
            let mut app = App::new(catalog, advisor, &config.retailer, summary_path);
            app.run(&mut terminal)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    if let Err(ref e) = result {
        error!("Wizard exited with error: {}", e);
    }
    Ok(result?)
}

/// Print the parts of `category` that fit the build made of `with`
fn list_parts(catalog: &Catalog, category: Category, with: &[String], json: bool) -> Result<()> {
    let build = BuildState::from_part_ids(catalog, with)?;
    let parts = eligible_parts(catalog, category, &build);

    if json {
        println!("{}", serde_json::to_string_pretty(&parts)?);
        return Ok(());
    }

    if parts.is_empty() {
        println!("No compatible parts found for your current selection.");
        if let Some(source) = constraint_hint(category, &build) {
            println!("Try changing your {}.", source);
        }
        return Ok(());
    }

    for part in parts {
        println!(
            "{:<8} {:<16} {:<48} {:<24} {:>10}",
            part.id,
            part.brand,
            part.name,
            part.spec_tags().join(" "),
            format_inr(u64::from(part.price))
        );
    }
    Ok(())
}

/// Print or save the summary of the build made of `ids`
fn print_summary(
    catalog: &Catalog,
    ids: &[String],
    output: Option<&Path>,
    advisor: Option<&dyn Advisor>,
) -> Result<()> {
    let build = BuildState::from_part_ids(catalog, ids)?;
    let review = advisor.map(|a| advisor::review_or_fallback(a, &build));
    let summary = BuildSummary::new(&build, review.as_deref());

    match output {
        Some(path) => {
            summary.save_to_file(path)?;
            println!("✓ Summary written to {}", path.display());
        }
        None => print!("{}", summary.to_text()),
    }
    Ok(())
}

/// Validate a catalog or advisor configuration file, told apart by shape
fn validate_file(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;
    let value: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("{:?} is not valid JSON", path))?;

    let is_catalog = value.is_array() || value.get("parts").is_some();
    let outcome = if is_catalog {
        Catalog::load_from_file(path).map(|c| format!("catalog with {} parts", c.len()))
    } else {
        AdvisorConfig::load_from_file(path)
            .and_then(|c| c.validate().map(|_| format!("advisor configuration (model {})", c.model)))
    };

    match outcome {
        Ok(description) => {
            info!("{:?} is a valid {}", path, description);
            println!("✓ {} is a valid {}", path.display(), description);
            Ok(())
        }
        Err(e) => {
            error!("Validation failed for {:?}: {:#}", path, e);
            eprintln!("✗ Validation failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

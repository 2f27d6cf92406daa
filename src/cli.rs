use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::types::Category;

/// rigbuilder - pick compatible PC parts step by step
#[derive(Parser, Debug)]
#[command(name = "rigbuilder")]
#[command(about = "A step-by-step PC part picker with compatibility filtering and AI advice")]
#[command(version)]
pub struct Cli {
    /// Parts catalog JSON file (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Advisor configuration JSON file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Never contact the AI advisor
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log file for the interactive UI (defaults to rigbuilder.log in the temp dir)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive build wizard (default)
    Run {
        /// Where the `s` key saves the build summary
        #[arg(short, long, default_value = "rig-summary.txt")]
        output: PathBuf,
    },
    /// List the parts of a category that fit a partial build
    Parts {
        /// Category: cpu, mobo, ram, gpu, storage, cooler, psu, case, monitor
        #[arg(value_parser = parse_category)]
        category: Category,

        /// Part ids already in the build
        #[arg(short, long = "with", value_name = "PART_ID", num_args = 1..)]
        with: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the price summary of a build
    Summary {
        /// Part ids making up the build
        #[arg(short, long, value_name = "PART_ID", num_args = 1.., required = true)]
        parts: Vec<String>,

        /// Write the summary to this file (.json for JSON) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Ask the AI advisor to review the build
        #[arg(long)]
        review: bool,
    },
    /// Validate a catalog or advisor configuration file
    Validate {
        /// Path to the file to validate
        file: PathBuf,
    },
}

/// Accepts short names (`cpu`) and display names (`Processor`), any case.
pub fn parse_category(s: &str) -> Result<Category, String> {
    let trimmed = s.trim();
    trimmed
        .parse::<Category>()
        .or_else(|_| trimmed.to_ascii_lowercase().parse::<Category>())
        .map_err(|_| {
            format!(
                "unknown category '{}' (expected cpu, mobo, ram, gpu, storage, cooler, psu, case, monitor)",
                s
            )
        })
}

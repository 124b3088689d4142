use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// planwright - assemble a project work plan from a module catalog
#[derive(Parser)]
#[command(name = "planwright")]
#[command(about = "Resolve module prerequisites and build an ordered work plan")]
#[command(version)]
pub struct Cli {
    /// Catalog file to use instead of the built-in catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog modules
    Modules,
    /// List strategy templates
    Templates,
    /// Validate a catalog file
    Validate {
        /// Path to catalog file to validate
        catalog: PathBuf,
    },
    /// Build a plan by replaying selection operations
    Plan {
        /// Template to load before applying operations
        #[arg(short, long)]
        template: Option<String>,

        /// Print the finalized plan as JSON
        #[arg(long)]
        json: bool,

        /// Operations: toggle:<id>, add:<id>, remove:<id>, move:<from>:<to>,
        /// template:<id>, clear (a bare id toggles)
        ops: Vec<String>,
    },
    /// Show prerequisite status of a module
    Status {
        /// Module id
        module: String,

        /// Modules assumed to be selected
        #[arg(short, long, num_args = 1..)]
        selected: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }
}

//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitrine landing-page generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: vitrine.toml)
    #[arg(short = 'C', long, default_value = "vitrine.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold base markup, stylesheet and an empty lead document
    Init,

    /// List available templates
    List,

    /// Render a template into the output directory
    Build {
        /// Template identifier (see `vitrine list`)
        template: String,

        /// Output directory path (relative to project root)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Custom business name
        #[arg(long)]
        name: Option<String>,

        /// Custom tagline
        #[arg(long)]
        tagline: Option<String>,

        /// Form target for the lead-capture section (e.g. http://127.0.0.1:8080/submit)
        #[arg(long = "leads-action")]
        leads_action: Option<String>,

        /// Minify the html content
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },

    /// Serve the rendered site and the `/submit` lead endpoint
    Serve {
        /// Directory to serve (default: build output)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,

        /// Lead document path
        #[arg(long)]
        leads: Option<PathBuf>,
    },

    /// Manage the captured lead document
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
}

/// `vitrine leads ...` subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum LeadsCommand {
    /// Create the lead document with an empty list if missing
    Init {
        /// Lead document path
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Export leads to CSV for CRM or email campaigns
    Export {
        /// Lead document path
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output CSV path (default: input path with `.csv` extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Lead document path given on the command line, if any.
    pub fn leads_path(&self) -> Option<&PathBuf> {
        match &self.command {
            Commands::Serve { leads, .. } => leads.as_ref(),
            Commands::Leads {
                command: LeadsCommand::Init { input } | LeadsCommand::Export { input, .. },
            } => input.as_ref(),
            _ => None,
        }
    }
}

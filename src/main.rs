//! Vitrine - landing pages from built-in templates, with local lead capture.

mod build;
mod capture;
mod cli;
mod config;
mod init;
mod leads;
mod registry;
mod render;
mod serve;
mod utils;

use anyhow::{Context, Result};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands, LeadsCommand};
use config::SiteConfig;
use init::new_site;
use leads::{JsonFileStore, LeadStore, export::export_csv};
use render::Overrides;
use serve::serve_site;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match cli.command {
        Commands::Init => new_site(&config),
        Commands::List => {
            list_templates();
            Ok(())
        }
        Commands::Build {
            template,
            name,
            tagline,
            leads_action,
            ..
        } => {
            let overrides = Overrides {
                name,
                tagline,
                leads_action,
            };
            let index = build_site(&config, &template, overrides)?;
            log!("build"; "generated {}", index.display());
            Ok(())
        }
        Commands::Serve { .. } => serve_site(&config),
        Commands::Leads { command } => run_leads(&config, command),
    }
}

/// Print available templates.
fn list_templates() {
    println!("\nAvailable templates:\n");
    for template in registry::TEMPLATES {
        println!(
            "  {:12} {}: {}",
            template.id,
            template.text("name"),
            template.text("tagline")
        );
    }
    println!();
}

/// `vitrine leads ...`
fn run_leads(config: &SiteConfig, command: LeadsCommand) -> Result<()> {
    let store = JsonFileStore::new(&config.leads.path);

    match command {
        LeadsCommand::Init { .. } => {
            if store.init()? {
                log!("leads"; "created {}", store.path().display());
            } else {
                log!("leads"; "{} already exists", store.path().display());
            }
            Ok(())
        }
        LeadsCommand::Export { output, .. } => {
            let records = store.load_all();
            if records.is_empty() {
                log!("leads"; "no leads found, run `vitrine leads init` to create {}", store.path().display());
                return Ok(());
            }

            let output = output
                .map(|path| config.root.join(path))
                .unwrap_or_else(|| default_export_path(store.path()));
            export_csv(&records, &output)
                .with_context(|| format!("Failed to export leads to {}", output.display()))?;
            log!("leads"; "exported {} leads to {}", records.len(), output.display());
            Ok(())
        }
    }
}

/// `leads/emails.json` → `leads/emails.csv`
fn default_export_path(input: &std::path::Path) -> PathBuf {
    input.with_extension("csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_path() {
        assert_eq!(
            default_export_path(std::path::Path::new("/srv/leads/emails.json")),
            PathBuf::from("/srv/leads/emails.csv")
        );
    }
}

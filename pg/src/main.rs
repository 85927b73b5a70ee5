use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use playground::cli::{Cli, Command, TemplateCommand};
use playground::config::Config;
use playground::{DEFAULT_TEMPLATE, Location, render};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

/// Resolve the location from an explicit root or by searching upward from the current directory
fn resolve_location(root: Option<PathBuf>, config: &Config) -> Result<Location> {
    if let Some(root) = root.or_else(|| config.root.clone()) {
        return Location::with_templates_dir(root, &config.templates_dir).context("Failed to open playgrounds root");
    }

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Location::discover(&cwd, &config.templates_dir)?
        .ok_or_else(|| eyre::eyre!("Could not find a playgrounds directory above {}", cwd.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let location = resolve_location(cli.root, &config)?;
    let base = location.playground_base().display().to_string();

    match cli.command {
        Command::New { name, template } => {
            let template_name = template.as_deref().unwrap_or(DEFAULT_TEMPLATE);
            location.new_playground(&name, template_name)?;
            let source = match &template {
                Some(t) => format!("template {}", t.cyan()),
                None => "default template".to_string(),
            };
            println!("{} Playground {} created from {}", "✓".green(), name.cyan(), source);
        }
        Command::Raze { name } => {
            location.destroy_playground(&name)?;
            println!("{} Deleted playground {} from {}", "✓".green(), name.cyan(), base);
        }
        Command::List => {
            println!("Playgrounds in {}:\n", base);
            let playgrounds = location.list_playgrounds()?;
            if playgrounds.is_empty() {
                println!("No playgrounds found");
            } else {
                let rows = render::playground_rows(&playgrounds, Utc::now());
                println!("{}", render::table(&["playground", "template", "created"], &rows));
            }
        }
        Command::Locate => {
            println!("Closest playgrounds location is {}", base);
        }
        Command::Template { command } => match command {
            TemplateCommand::New { name } => {
                location.new_template(&name)?;
                println!("{} Created template {} in {}", "✓".green(), name.cyan(), base);
            }
            TemplateCommand::Destroy { name } => {
                location.destroy_template(&name)?;
                println!("{} Deleted template {} from {}", "✓".green(), name.cyan(), base);
            }
            TemplateCommand::List => {
                println!("Templates in {}:\n", base);
                let mut templates = location.list_templates()?;
                if templates.is_empty() {
                    println!("No templates found");
                } else {
                    templates.sort();
                    let rows: Vec<Vec<String>> = templates.into_iter().map(|t| vec![t]).collect();
                    println!("{}", render::table(&["template"], &rows));
                }
            }
            TemplateCommand::Default { name: Some(name) } => {
                location.set_default_template(&name)?;
                println!("{} Default template set to {} for {}", "✓".green(), name.cyan(), base);
            }
            TemplateCommand::Default { name: None } => match location.default_template()? {
                Some(default) => println!("Default template for {}: {}", base, default.cyan()),
                None => println!("Default template not set for {}", base),
            },
        },
    }

    Ok(())
}

//! CLI entry point for db2jdl-config

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use db2jdl_config::{ApplicationSettings, RawSettings};

#[derive(Parser)]
#[command(name = "db2jdl-config")]
#[command(about = "Validate and inspect settings for exporting a database schema to JDL")]
#[command(version)]
struct Cli {
    /// Path to configuration file (TOML format); defaults to ./db2jdl.toml if present
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database to export (overrides config)
    #[arg(short, long)]
    database: Option<String>,

    /// Reserved-keyword resource locator (overrides config)
    #[arg(short, long)]
    keywords: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the settings and print a summary (default)
    Check,
    /// Print the resolved settings as TOML
    Show,
    /// Print the flattened reserved keywords, one per line
    Keywords,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load raw configuration first (before logging, so we can use log_level)
    let mut raw = RawSettings::load(cli.config.as_deref())?;

    // Initialize logging
    // Priority: RUST_LOG env var > log_level > default (debug for dev, info for release)
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };
    let log_level = raw.log_level.as_deref().unwrap_or(default_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Apply CLI overrides
    if let Some(database) = cli.database {
        raw.database_to_export = database;
    }
    if let Some(keywords) = cli.keywords {
        raw.reserved_keywords = keywords;
    }

    let settings = ApplicationSettings::from_raw(raw)?;

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => {
            print_summary(&settings);
            info!("Settings for {} are valid", settings.database_to_export());
        }
        Commands::Show => print!("{}", toml::to_string_pretty(&settings)?),
        Commands::Keywords => {
            for keyword in settings.reserved_keywords() {
                println!("{}", keyword);
            }
        }
    }

    Ok(())
}

fn print_summary(settings: &ApplicationSettings) {
    println!("Database:           {}", settings.database_to_export());
    println!(
        "Object prefixes:    {:?}",
        settings.database_object_prefixes()
    );
    println!("Ignored tables:     {:?}", settings.ignored_table_names());
    println!("Table names in JDL: {}", settings.add_table_name_to_jdl());
    println!("Undefined types:    {}", settings.undefined_type_handling());
    println!(
        "Export:             {} ({})",
        settings.export().path().display(),
        settings.export().format()
    );
    println!(
        "Reserved keywords:  {}",
        settings.reserved_keywords().len()
    );
}

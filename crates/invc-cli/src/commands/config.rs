//! Config command - manage tool configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use invc_core::models::config::InvcConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration file (default: the per-user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init {
        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "render.theme")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => show_config(&config_path),
        ConfigCommand::Init { force } => init_config(&config_path, force),
        ConfigCommand::Get { key } => get_config(&config_path, &key),
        ConfigCommand::Set { key, value } => set_config(&config_path, &key, &value),
        ConfigCommand::Path => show_path(&config_path),
    }
}

pub(crate) fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invc")
        .join("config.json")
}

/// Load the configuration, treating a missing file as the defaults.
pub(crate) fn load_config() -> InvcConfig {
    let path = default_config_path();
    if path.exists() {
        InvcConfig::from_file(&path).unwrap_or_default()
    } else {
        InvcConfig::default()
    }
}

fn show_config(config_path: &Path) -> anyhow::Result<()> {
    let config = if config_path.exists() {
        InvcConfig::from_file(config_path)?
    } else {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
        InvcConfig::default()
    };

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let config = InvcConfig::default();
    config.save(config_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        config_path.display()
    );

    Ok(())
}

fn get_config(config_path: &Path, key: &str) -> anyhow::Result<()> {
    let config = if config_path.exists() {
        InvcConfig::from_file(config_path)?
    } else {
        InvcConfig::default()
    };

    // Convert config to JSON for key lookup
    let json = serde_json::to_value(&config)?;

    let mut current = &json;
    for part in key.split('.') {
        current = current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    }

    println!("{}", serde_json::to_string_pretty(current)?);

    Ok(())
}

fn set_config(config_path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let config = if config_path.exists() {
        InvcConfig::from_file(config_path)?
    } else {
        InvcConfig::default()
    };

    // Values that are not valid JSON are treated as plain strings.
    let parsed_value: serde_json::Value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

    let mut json = serde_json::to_value(&config)?;

    let parts: Vec<&str> = key.split('.').collect();
    let mut current = &mut json;
    for (i, part) in parts.iter().enumerate() {
        if i == parts.len() - 1 {
            let Some(obj) = current.as_object_mut() else {
                anyhow::bail!("Cannot set value at non-object path");
            };
            obj.insert((*part).to_string(), parsed_value.clone());
        } else {
            current = current
                .get_mut(*part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    // Round-trip through the typed config so bad keys or values fail here
    // instead of corrupting the file.
    let config: InvcConfig = serde_json::from_value(json)?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(config_path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path(config_path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'invc config init' to create a configuration file.");
    }

    Ok(())
}

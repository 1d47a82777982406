//! Preset command - manage shareable invoice presets.
//!
//! Presets live in a single JSON store file; every subcommand reads the whole
//! file, applies its change, and writes the file back.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use invc_core::models::invoice::Invoice;
use invc_core::portable;
use invc_core::store::PresetStore;

use super::config::load_config;

/// Arguments for the preset command.
#[derive(Args)]
pub struct PresetArgs {
    /// Preset store file (default: the configured path, else the per-user
    /// data directory)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand)]
enum PresetCommand {
    /// Save an invoice under a short shareable code
    Save {
        /// Preset code (3-8 letters or digits)
        code: String,

        /// Portable invoice JSON to save
        input: PathBuf,
    },

    /// Load a preset as a full invoice document
    Load {
        /// Preset code
        code: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List stored preset codes
    List,

    /// Delete a preset
    Delete {
        /// Preset code
        code: String,
    },

    /// Export the whole store as a JSON blob
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge a JSON blob into the store
    Import {
        /// Blob file to import
        input: PathBuf,
    },
}

pub async fn run(args: PresetArgs) -> anyhow::Result<()> {
    let store_path = args.store.clone().unwrap_or_else(default_store_path);

    match args.command {
        PresetCommand::Save { code, input } => save(&store_path, &code, &input),
        PresetCommand::Load { code, output } => load(&store_path, &code, output.as_deref()),
        PresetCommand::List => list(&store_path),
        PresetCommand::Delete { code } => delete(&store_path, &code),
        PresetCommand::Export { output } => export(&store_path, output.as_deref()),
        PresetCommand::Import { input } => import(&store_path, &input),
    }
}

fn default_store_path() -> PathBuf {
    if let Some(path) = load_config().store.path {
        return path;
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invc")
        .join("presets.json")
}

fn save(store_path: &Path, code: &str, input: &Path) -> anyhow::Result<()> {
    let text = fs::read_to_string(input)?;
    let invoice = portable::parse(&text)?;

    let mut store = PresetStore::from_file(store_path)?;
    let stored = store.save(code, &invoice.to_patch())?;
    store.save_to_file(store_path)?;

    println!(
        "{} Saved preset {} ({} in store)",
        style("✓").green(),
        stored,
        store.len()
    );

    Ok(())
}

fn load(store_path: &Path, code: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let store = PresetStore::from_file(store_path)?;
    let patch = store.load(code)?;
    let invoice = Invoice::from_patch(&patch);
    let text = portable::export(&invoice)?;

    if let Some(output_path) = output {
        fs::write(output_path, &text)?;
        println!(
            "{} Invoice written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn list(store_path: &Path) -> anyhow::Result<()> {
    let store = PresetStore::from_file(store_path)?;

    if store.is_empty() {
        println!("No presets stored at {}", store_path.display());
        return Ok(());
    }

    println!("Stored presets ({}):", store.len());
    for code in store.list() {
        println!("  {}", code);
    }

    Ok(())
}

fn delete(store_path: &Path, code: &str) -> anyhow::Result<()> {
    let mut store = PresetStore::from_file(store_path)?;

    if store.delete(code) {
        store.save_to_file(store_path)?;
        println!(
            "{} Deleted preset {}",
            style("✓").green(),
            code.trim().to_uppercase()
        );
    } else {
        println!("{} No preset found for code {:?}", style("ℹ").blue(), code);
    }

    Ok(())
}

fn export(store_path: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let store = PresetStore::from_file(store_path)?;
    let blob = store.export_blob()?;

    if let Some(output_path) = output {
        fs::write(output_path, &blob)?;
        println!(
            "{} Store written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", blob);
    }

    Ok(())
}

fn import(store_path: &Path, input: &Path) -> anyhow::Result<()> {
    let blob = fs::read_to_string(input)?;

    let mut store = PresetStore::from_file(store_path)?;
    let added = store.import_blob(&blob)?;
    store.save_to_file(store_path)?;

    println!(
        "{} Imported {} new presets ({} total)",
        style("✓").green(),
        added,
        store.len()
    );

    Ok(())
}

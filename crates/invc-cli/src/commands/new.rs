//! New command - start a fresh invoice document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use invc_core::models::invoice::Invoice;
use invc_core::{portable, samples};

use super::config::load_config;

/// Arguments for the new command.
#[derive(Args)]
pub struct NewArgs {
    /// Start from a bundled sample instead of the blank default
    #[arg(short, long)]
    sample: Option<String>,

    /// List available samples and exit
    #[arg(long)]
    list: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: NewArgs) -> anyhow::Result<()> {
    if args.list {
        println!("Available samples:");
        for sample in samples::SAMPLES {
            println!("  {:<12} {}", sample.id, sample.description);
        }
        return Ok(());
    }

    let invoice = match args.sample.as_deref() {
        Some(id) => {
            let patch = samples::sample_patch(id).ok_or_else(|| {
                let ids: Vec<&str> = samples::SAMPLES.iter().map(|s| s.id).collect();
                anyhow::anyhow!("Unknown sample: {} (available: {})", id, ids.join(", "))
            })?;
            Invoice::from_patch(&patch)
        }
        None => {
            let config = load_config();
            let mut invoice = Invoice::default();
            invoice.currency = config.draft.currency;
            if let Some(terms) = config.draft.terms {
                invoice.terms = terms;
            }
            invoice.recalculate();
            invoice
        }
    };

    let output = portable::export(&invoice)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Invoice written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

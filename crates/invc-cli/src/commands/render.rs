//! Render command - produce a downloadable artifact from an invoice.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use invc_core::render::{artifact_file_name, DocumentRenderer, TextRenderer};
use invc_core::{portable, themes};

use super::config::load_config;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Portable invoice JSON to render
    #[arg(required = true)]
    input: PathBuf,

    /// Theme id (default: the configured theme; unknown ids resolve to the
    /// default theme)
    #[arg(short, long)]
    theme: Option<String>,

    /// Output file (default: derived from the invoice number)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn run(args: RenderArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let invoice = portable::parse(&text)?;

    let theme = match args.theme.as_deref() {
        Some(id) => themes::theme_by_id(id),
        None => themes::theme_by_id(&load_config().render.theme),
    };

    debug!("Rendering {} with theme {}", invoice.invoice_number, theme.id);

    let rendered = TextRenderer.render(&invoice, &theme)?;
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(artifact_file_name(&invoice, rendered.extension)));

    fs::write(&output_path, &rendered.bytes)?;

    println!(
        "{} Rendered {} to {}",
        style("✓").green(),
        invoice.invoice_number,
        output_path.display()
    );

    Ok(())
}

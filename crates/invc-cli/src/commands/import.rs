//! Import command - load an invoice from a portable document or a PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use invc_core::models::invoice::Invoice;
use invc_core::render::{DocumentRenderer, TextRenderer};
use invc_core::session::editor::{EditorAction, InvoiceEditor};
use invc_core::{portable, themes};

/// Arguments for the import command.
#[derive(Args)]
pub struct ImportArgs {
    /// Input file (.json or .pdf)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Portable JSON document
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ImportArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    info!("Importing file: {}", args.input.display());

    let invoice = match extension.as_str() {
        "json" => import_json(&args.input)?,
        "pdf" => import_pdf(&args.input)?,
        _ => anyhow::bail!(
            "Unsupported file format: {:?}. Supported formats: .json or .pdf",
            extension
        ),
    };

    let output = format_invoice(&invoice, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total import time: {:?}", start.elapsed());

    Ok(())
}

fn import_json(path: &Path) -> anyhow::Result<Invoice> {
    let text = fs::read_to_string(path)?;
    let invoice = portable::parse(&text)?;
    Ok(invoice)
}

fn import_pdf(path: &Path) -> anyhow::Result<Invoice> {
    let data = fs::read(path)?;
    let patch = invc_core::extract_invoice(&data)?;

    let mut editor = InvoiceEditor::new();
    editor.apply(EditorAction::LoadPreset { data: patch });
    Ok(editor.into_invoice())
}

pub(crate) fn format_invoice(invoice: &Invoice, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(portable::export(invoice)?),
        OutputFormat::Csv => format_csv(invoice),
        OutputFormat::Text => {
            let rendered = TextRenderer.render(invoice, &themes::default_theme())?;
            Ok(String::from_utf8(rendered.bytes)?)
        }
    }
}

fn format_csv(invoice: &Invoice) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record([
        "invoice_number",
        "invoice_date",
        "due_date",
        "company_name",
        "client_name",
        "subtotal",
        "tax_amount",
        "discount_amount",
        "total",
        "currency",
    ])?;

    // Write data
    wtr.write_record([
        &invoice.invoice_number,
        &invoice.invoice_date,
        &invoice.due_date,
        &invoice.company_name,
        &invoice.client_name,
        &invoice.subtotal.to_string(),
        &invoice.tax_amount.to_string(),
        &invoice.discount_amount.to_string(),
        &invoice.total.to_string(),
        &invoice.currency,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

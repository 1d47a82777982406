//! Batch command - extract drafts from many PDF files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use invc_core::models::invoice::Invoice;
use invc_core::session::editor::{EditorAction, InvoiceEditor};

use super::import::{format_invoice, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of extracting a single file.
struct ExtractResult {
    path: PathBuf,
    invoice: Option<Invoice>,
    error: Option<String>,
}

pub async fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("pdf")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching PDF files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Create output directory if specified
    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match extract_file(&path) {
            Ok(invoice) => {
                results.push(ExtractResult {
                    path: path.clone(),
                    invoice: Some(invoice),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ExtractResult {
                        path: path.clone(),
                        invoice: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.invoice.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    // Write per-file outputs
    for result in &successful {
        if let (Some(invoice), Some(output_dir)) = (&result.invoice, &args.output_dir) {
            let output_name = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("invoice");

            let extension = match args.format {
                OutputFormat::Json => "json",
                OutputFormat::Csv => "csv",
                OutputFormat::Text => "txt",
            };

            let output_path = output_dir.join(format!("{}.{}", output_name, extension));
            let content = format_invoice(invoice, args.format)?;

            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn extract_file(path: &PathBuf) -> anyhow::Result<Invoice> {
    let data = fs::read(path)?;
    let patch = invc_core::extract_invoice(&data)?;

    let mut editor = InvoiceEditor::new();
    editor.apply(EditorAction::LoadPreset { data: patch });
    Ok(editor.into_invoice())
}

fn write_summary(path: &PathBuf, results: &[ExtractResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "invoice_number",
        "client_name",
        "total",
        "currency",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(invoice) = &result.invoice {
            wtr.write_record([
                filename,
                "success",
                &invoice.invoice_number,
                &invoice.client_name,
                &invoice.total.to_string(),
                &invoice.currency,
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

//! CLI application for building invoices and extracting drafts from PDFs.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, import, new, preset, render, themes};

/// Invoice creator - build invoices, extract drafts from PDFs, manage presets
#[derive(Parser)]
#[command(name = "invc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import an invoice from a portable JSON document or a PDF
    Import(import::ImportArgs),

    /// Extract drafts from many PDFs at once
    Batch(batch::BatchArgs),

    /// Start a new invoice document
    New(new::NewArgs),

    /// Manage shareable invoice presets
    Preset(preset::PresetArgs),

    /// Browse the built-in theme catalog
    Themes(themes::ThemesArgs),

    /// Render an invoice to a downloadable artifact
    Render(render::RenderArgs),

    /// Manage tool configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Import(args) => import::run(args).await,
        Commands::Batch(args) => batch::run(args).await,
        Commands::New(args) => new::run(args).await,
        Commands::Preset(args) => preset::run(args).await,
        Commands::Themes(args) => themes::run(args).await,
        Commands::Render(args) => render::run(args).await,
        Commands::Config(args) => config::run(args).await,
    }
}

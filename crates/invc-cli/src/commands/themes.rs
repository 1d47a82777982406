//! Themes command - browse the built-in theme catalog.

use clap::{Args, Subcommand};
use console::style;

use invc_core::themes;

/// Arguments for the themes command.
#[derive(Args)]
pub struct ThemesArgs {
    #[command(subcommand)]
    command: Option<ThemesCommand>,
}

#[derive(Subcommand)]
enum ThemesCommand {
    /// List the built-in themes
    List,

    /// Print one resolved theme as JSON
    Show {
        /// Theme id (unknown ids resolve to the default theme)
        id: String,
    },
}

pub async fn run(args: ThemesArgs) -> anyhow::Result<()> {
    match args.command.unwrap_or(ThemesCommand::List) {
        ThemesCommand::List => list(),
        ThemesCommand::Show { id } => show(&id),
    }
}

fn list() -> anyhow::Result<()> {
    println!("Built-in themes:");
    for theme in themes::CATALOG.iter() {
        println!(
            "  {:<18} {} - {}",
            theme.id,
            style(&theme.name).bold(),
            theme.description
        );
    }

    Ok(())
}

fn show(id: &str) -> anyhow::Result<()> {
    let theme = themes::theme_by_id(id);

    if theme.id != id {
        println!(
            "{} Unknown theme {:?}, showing the default.",
            style("ℹ").blue(),
            id
        );
    }

    println!("{}", serde_json::to_string_pretty(&theme)?);

    Ok(())
}

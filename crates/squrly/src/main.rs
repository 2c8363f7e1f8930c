//! squrly CLI - Main entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "squrly")]
#[command(version)]
#[command(about = "Fill {placeholders} in text templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Substitute a template and print the result
    Render {
        /// Template text
        template: Option<String>,

        /// Read the template from FILE (use '--file -' for stdin)
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,

        /// JSON file holding a single map or list of values
        #[arg(short, long, conflicts_with_all = ["set", "values"])]
        data: Option<PathBuf>,

        /// Named value (KEY=VALUE)
        #[arg(short, long, conflicts_with = "values")]
        set: Vec<String>,

        /// Positional values, addressed as {0}, {1}, ...
        #[arg(last = true)]
        values: Vec<String>,
    },

    /// List the placeholders found in a template
    Keys {
        /// Template text
        template: Option<String>,

        /// Read the template from FILE (use '--file -' for stdin)
        #[arg(short, long, conflicts_with = "template")]
        file: Option<PathBuf>,

        /// Print placeholders as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "squrly=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            template,
            file,
            data,
            set,
            values,
        } => commands::render::execute(commands::render::RenderArgs {
            input: commands::TemplateInput { template, file },
            data,
            set,
            values,
        }),
        Commands::Keys {
            template,
            file,
            json,
        } => commands::keys::execute(commands::keys::KeysArgs {
            input: commands::TemplateInput { template, file },
            json,
        }),
    }
}

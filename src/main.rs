//! CLI entry point for wxr2md

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wxr2md::config::{ExportConfig, OnError};
use wxr2md::Wxr2Md;

#[derive(Parser)]
#[command(name = "wxr2md")]
#[command(version)]
#[command(about = "Convert WordPress WXR exports into Markdown files with JSON front-matter", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    cwd: Option<PathBuf>,

    /// Use this config file instead of wxr2md.yml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write every post as <slug>.md
    #[command(alias = "e")]
    Export {
        /// WXR file to read
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep exporting after a post fails to write
        #[arg(long)]
        keep_going: bool,
    },

    /// List posts, categories or tags
    List {
        /// WXR file to read
        input: PathBuf,

        /// Type of content to list (post, category, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Print the parsed export as JSON
    Dump {
        /// WXR file to read
        input: PathBuf,

        /// Only print the post with this slug
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "wxr2md=debug,info"
    } else {
        "wxr2md=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let mut app = match &cli.config {
        Some(path) => Wxr2Md::with_config(&base_dir, ExportConfig::load(path)?),
        None => Wxr2Md::new(&base_dir)?,
    };

    match cli.command {
        Commands::Export {
            input,
            output,
            keep_going,
        } => {
            if let Some(output) = output {
                app.config.output_dir = output.to_string_lossy().into_owned();
            }
            if keep_going {
                app.config.on_error = OnError::Continue;
            }

            tracing::info!("Exporting {:?} to {:?}", input, app.output_dir());
            let report = app.export(&input)?;
            println!(
                "Exported {} posts to {:?} ({} skipped)",
                report.written.len(),
                app.output_dir(),
                report.skipped
            );

            if !report.is_complete() {
                for err in &report.failed {
                    eprintln!("  {}", err);
                }
                anyhow::bail!("{} posts failed to export", report.failed.len());
            }
        }

        Commands::List { input, r#type } => {
            app.list(&input, &r#type)?;
        }

        Commands::Dump { input, slug } => {
            let json = wxr2md::commands::dump::run(&app, &input, slug.as_deref())?;
            println!("{}", json);
        }

        Commands::Version => {
            println!("wxr2md version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

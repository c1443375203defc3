//! Wetrocloud - command-line access to the Wetrocloud API
//!
//! Main entry point for the `wetrocloud` CLI. Every command prints the API
//! response as JSON on stdout; logs go to stderr.

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use console::Style;
use wetrocloud::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, WetrocloudClient};

mod commands;

use commands::{collection, convert, generate, resource};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Wetrocloud - manage collections, query knowledge and convert content
#[derive(Parser)]
#[command(name = "wetrocloud")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print JSON on a single line instead of pretty-printed
    #[arg(long, global = true)]
    pub compact: bool,

    /// API key
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collection management, query and chat
    Collection(collection::CollectionArgs),

    /// Insert, remove and categorize resources
    Resource(resource::ResourceArgs),

    /// Generate text from a prompt
    Generate(generate::GenerateArgs),

    /// Ask a question about an image
    ImageToText(generate::ImageToTextArgs),

    /// Convert a file, web page or image to markdown
    Markdown(convert::MarkdownArgs),

    /// Fetch a YouTube transcript
    Transcript(convert::TranscriptArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let red = Style::new().red().bold();
            eprintln!("{} {:#}", red.apply_to("Error:"), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let api_key = cli.api_key.with_context(|| {
        format!("missing API key: pass --api-key or set {}", API_KEY_ENV)
    })?;

    let client = WetrocloudClient::builder()
        .api_key(api_key)
        .base_url(cli.base_url)
        .build()?;

    let ctx = commands::Context {
        client,
        compact: cli.compact,
    };

    match cli.command {
        Commands::Collection(args) => collection::run(args, &ctx),
        Commands::Resource(args) => resource::run(args, &ctx),
        Commands::Generate(args) => generate::run(args, &ctx),
        Commands::ImageToText(args) => generate::run_image_to_text(args, &ctx),
        Commands::Markdown(args) => convert::run_markdown(args, &ctx),
        Commands::Transcript(args) => convert::run_transcript(args, &ctx),
    }
}

/// Console logging on stderr; `RUST_LOG` overrides the default filter.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::prelude::*;

    let default_filter = if verbose {
        "wetrocloud=debug,wetrocloud_cli=debug,warn"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter),
        )
        .init();
}

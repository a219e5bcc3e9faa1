//! onsale CLI - itch.io on-sale listings fetcher.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use onsale_lib::prelude::*;
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "onsale")]
#[command(about = "itch.io on-sale listings fetcher", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Maximum request attempts for a rate-limited fetch
    #[arg(long, default_value = "5", global = true)]
    retries: u32,

    /// Delay between rate-limited attempts, in milliseconds
    #[arg(long, default_value = "2000", global = true)]
    delay_ms: u64,

    /// HTTP request timeout, in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every on-sale listing page for a category
    Sales {
        /// Category to walk (see `onsale categories`)
        #[arg(default_value = "games")]
        category: String,

        /// Page to start the walk from
        #[arg(short, long, default_value = "1")]
        start_page: u32,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,
    },

    /// List supported categories
    Categories,

    /// Fetch a single listing page and report its item count
    Page {
        /// Category the page belongs to
        category: String,

        /// 1-based page number
        page: u32,

        /// Print the decoded record as JSON instead of a summary
        #[arg(long)]
        raw: bool,
    },

    /// Fetch a game or sale detail page
    Game {
        /// Site-relative path or fully-qualified URL
        link: String,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = ClientConfig {
        max_attempts: cli.retries,
        retry_delay: Duration::from_millis(cli.delay_ms),
        timeout: Duration::from_secs(cli.timeout_secs),
        ..ClientConfig::default()
    };

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Sales {
            category,
            start_page,
            output,
            format,
        } => commands::sales::sales(config, &category, start_page, output, format, cli.quiet).await,
        Commands::Categories => commands::categories::categories(),
        Commands::Page {
            category,
            page,
            raw,
        } => commands::page::page(config, &category, page, raw).await,
        Commands::Game { link, output } => {
            commands::game::game(config, &link, output, cli.quiet).await
        }
    }
}

/// Maps `-v` counts onto a tracing filter, unless RUST_LOG overrides it.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

//! Game command implementation.

use crate::display;
use anyhow::{Context, Result};
use onsale_lib::prelude::*;
use std::path::PathBuf;

/// Fetch a game or sale detail page and write out the raw body.
pub(crate) async fn game(
    config: ClientConfig,
    link: &str,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<()> {
    let client = SaleClient::new(config).context("Failed to create HTTP client")?;
    let body = client
        .game_page(link)
        .await
        .with_context(|| format!("Failed to fetch {link}"))?;

    display::write_body(&body, output.as_deref())?;

    if !quiet {
        if let Some(path) = output {
            println!("Output written to: {}", path.display());
        }
    }

    Ok(())
}

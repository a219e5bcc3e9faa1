//! Sales command implementation.
//!
//! Walks every on-sale listing page for a category and writes the
//! collected pages to the chosen output.

use crate::display::{self, Format};
use anyhow::{Context, Result};
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use onsale_lib::prelude::*;
use std::path::PathBuf;

/// Fetch every on-sale listing page for a category.
pub(crate) async fn sales(
    config: ClientConfig,
    category: &str,
    start_page: u32,
    output: Option<PathBuf>,
    format: Format,
    quiet: bool,
) -> Result<()> {
    let category: Category = category
        .parse()
        .with_context(|| format!("Unknown category: {category}"))?;

    let client = SaleClient::new(config).context("Failed to create HTTP client")?;

    // Setup progress spinner; the total page count is only known at the end.
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} pages {msg}")
                .expect("Invalid progress template"),
        );
        pb.set_message(format!("fetching {category} on sale"));
        pb
    };

    let mut pages: Vec<Content> = Vec::new();
    let mut stream = std::pin::pin!(sale_stream(&client, category, start_page));

    while let Some(content) = stream.next().await {
        pages.push(content?);
        progress.inc(1);
    }

    let total_items: u32 = pages.iter().map(|page| page.num_items).sum();
    progress.finish_with_message(format!(
        "fetched {} pages ({} items on sale)",
        pages.len(),
        total_items
    ));

    display::write_pages(&pages, output.as_deref(), format)?;

    if !quiet {
        if let Some(path) = output {
            println!("Output written to: {}", path.display());
        }
    }

    Ok(())
}

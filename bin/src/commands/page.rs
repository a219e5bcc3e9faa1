//! Page command implementation.

use anyhow::{Context, Result};
use onsale_lib::prelude::*;

/// Fetch a single listing page and report what it carried.
pub(crate) async fn page(
    config: ClientConfig,
    category: &str,
    page: u32,
    raw: bool,
) -> Result<()> {
    let category: Category = category
        .parse()
        .with_context(|| format!("Unknown category: {category}"))?;

    let client = SaleClient::new(config).context("Failed to create HTTP client")?;
    let listing = fetch_listing(&client, category, page).await?;

    if raw {
        println!("{}", serde_json::to_string_pretty(&listing.content)?);
        return Ok(());
    }

    println!(
        "{} page {}: {} items{}",
        category,
        listing.page,
        listing.num_items(),
        if listing.is_last { " (last page)" } else { "" }
    );
    Ok(())
}

//! Categories command implementation.

use anyhow::Result;
use onsale_lib::prelude::*;

/// List the supported catalog categories.
pub(crate) fn categories() -> Result<()> {
    println!("{:<12} {:<50}", "ID", "LISTING URL");
    println!("{}", "-".repeat(62));

    for category in Category::all() {
        println!(
            "{:<12} {:<50}",
            category.as_str(),
            listing_url(BASE_URL, *category, 1)
        );
    }

    println!("\nTotal: {} categories", Category::all().len());
    Ok(())
}

//! Rust library for fetching itch.io on-sale listings.
//!
//! This is a facade crate that re-exports functionality from the onsale
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use onsale_lib::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SaleClient::with_defaults()?;
//!
//!     let mut pages = std::pin::pin!(sale_stream(&client, Category::Games, 1));
//!     while let Some(content) = pages.next().await {
//!         println!("page carried {} items", content?.num_items);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/onsale-rs/onsale/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use onsale_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use onsale_fetch::{
    ClientConfig, DecodeError, FetchError, ListingError, ListingPage, SaleClient, collect_sales,
    decode_listing, fetch_listing, games_listing, sale_stream, url,
};

/// Prelude module for convenient imports.
///
/// ```
/// use onsale_lib::prelude::*;
/// ```
pub mod prelude {
    pub use onsale_types::{Category, CategoryParseError, Content};

    #[cfg(feature = "fetch")]
    pub use onsale_fetch::{
        ClientConfig, FetchError, ListingError, ListingPage, SaleClient, collect_sales,
        fetch_listing, games_listing, sale_stream,
        url::{BASE_URL, listing_url, page_url},
    };
}

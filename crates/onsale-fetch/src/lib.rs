//! HTTP client and listing retrieval for the onsale catalog fetcher.
//!
//! This crate provides the sale-listing download pipeline:
//!
//! - [`url::listing_url`] - Constructs itch.io listing URLs
//! - [`SaleClient`] - HTTP client with connection pooling and fixed-delay
//!   retry on rate limits
//! - [`decode_listing`] - JSON decoding of a listing body
//! - [`sale_stream`] - Lazy sequential walk over listing pages

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/onsale-rs/onsale/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod decode;
mod stream;
pub mod url;

pub use client::{ClientConfig, FetchError, SaleClient};
pub use decode::{DecodeError, decode_listing};
pub use stream::{
    ListingError, ListingPage, collect_sales, fetch_listing, games_listing, sale_stream,
};

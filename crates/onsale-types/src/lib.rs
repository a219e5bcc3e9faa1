//! Core types for the onsale listings fetcher.
//!
//! This crate provides the fundamental data structures used throughout
//! onsale:
//!
//! - [`Category`] - A catalog section that sale listings are scoped to
//! - [`Content`] - The decoded record of one on-sale listing page

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/onsale-rs/onsale/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod category;
mod content;

pub use category::{Category, CategoryParseError};
pub use content::Content;

//! Display utilities and output formatting for the onsale CLI.

use anyhow::Result;
use clap::ValueEnum;
use onsale_lib::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Output format for fetched listings.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Write listing pages to a file, or stdout when no path is given.
pub(crate) fn write_pages(pages: &[Content], output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_pages_to(pages, BufWriter::new(file), format)
        }
        None => write_pages_to(pages, io::stdout().lock(), format),
    }
}

fn write_pages_to<W: Write>(pages: &[Content], mut writer: W, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut writer, pages)?;
            writeln!(writer)?;
        }
        Format::Ndjson => {
            for page in pages {
                serde_json::to_writer(&mut writer, page)?;
                writeln!(writer)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a raw page body to a file, or stdout when no path is given.
pub(crate) fn write_body(body: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, body)?;
            Ok(())
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

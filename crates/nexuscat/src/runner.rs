//! Fetch and print in one pass

use anyhow::{Context, Result};
use nexus_common::config::GAME_DOMAIN;
use nexus_common::{fetch_categories, render, NexusTransport, OutputFormat};
use std::io::Write;

/// Fetch categories for the fixed game domain and render them.
/// Returns the number of rows printed; zero is not an error.
pub fn run<T, O, E>(api: &T, format: OutputFormat, out: &mut O, err: &mut E) -> Result<usize>
where
    T: NexusTransport + ?Sized,
    O: Write,
    E: Write,
{
    let fetch = fetch_categories(api, GAME_DOMAIN)
        .with_context(|| format!("Failed to fetch categories for '{}'", GAME_DOMAIN))?;

    tracing::debug!(
        "{} categories from {:?}",
        fetch.categories.len(),
        fetch.source
    );

    let rows = render(GAME_DOMAIN, fetch.categories, format, out, err)
        .context("Failed to write category output")?;
    Ok(rows)
}

//! Loading rate tables from a local feed document.

use std::path::Path;

use anyhow::{Context, Result};
use exchange_rates::{RateTable, parse_feed};

/// Reads a reference-rate feed saved on disk.
pub async fn load_feed_file(path: &Path) -> Result<RateTable> {
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("unable to read rates file {}", path.display()))?;

    let table = parse_feed(&body)
        .with_context(|| format!("unable to parse rates file {}", path.display()))?;

    tracing::debug!(path = %path.display(), currencies = table.len(), "loaded rates file");
    Ok(table)
}

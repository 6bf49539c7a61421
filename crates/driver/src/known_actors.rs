//! Known-actor lists supplied by the caller.
use std::{collections::BTreeSet, fs, path::Path};

use eyre::{Context, Result};
use primitives::{Address, address::normalize};
use tracing::info;

/// Parse one address per line. Blank lines and `#` comments are ignored.
pub fn parse_known_actors(text: &str) -> Result<BTreeSet<Address>> {
    let mut actors = BTreeSet::new();
    for (index, line) in text.lines().enumerate() {
        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }
        let actor = normalize(entry)
            .wrap_err_with(|| format!("line {}: not a valid actor address", index + 1))?;
        actors.insert(actor);
    }
    Ok(actors)
}

/// Read a known-actor list from `path`.
pub fn load_known_actors(path: &Path) -> Result<BTreeSet<Address>> {
    let text = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read known actors from {}", path.display()))?;
    let actors = parse_known_actors(&text)
        .wrap_err_with(|| format!("Malformed known actors file {}", path.display()))?;
    info!(path = %path.display(), count = actors.len(), "Loaded known actors");
    Ok(actors)
}

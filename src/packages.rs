use std::fs;
use std::io;

use anyhow::{Context, Result};
use camino::Utf8Path;
use tracing::debug;

/// Read a newline-delimited package list. Absent paths yield no packages.
pub fn load(path: Option<&Utf8Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(%path, "package list not found; continuing without extra packages");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err).with_context(|| format!("reading package list {}", path)),
    };

    let packages = parse(&raw);
    debug!(%path, count = packages.len(), "loaded package list");
    Ok(packages)
}

pub fn parse(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

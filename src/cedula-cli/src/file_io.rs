//! Payload input helpers

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a payload from the argument, a file, or stdin (in that order).
///
/// Surrounding ASCII whitespace is removed, as keyboard-wedge scanners
/// terminate each read with a newline. An empty payload is an error.
pub fn read_payload(payload: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    let raw = match (payload, file) {
        (Some(text), _) => text.as_bytes().to_vec(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        (None, None) => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let trimmed = raw.trim_ascii();
    if trimmed.is_empty() {
        bail!("Empty payload");
    }
    Ok(trimmed.to_vec())
}
